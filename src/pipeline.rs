use std::fs;
use std::time::SystemTime;

use log::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::example::Example;
use crate::process::Executor;

#[derive(Debug, Clone, Copy)]
pub struct BuildOutcome {
    pub started: SystemTime,
    pub code: Option<i32>,
}

pub struct Pipeline<'a, E: Executor + ?Sized> {
    config: &'a HarnessConfig,
    executor: &'a E,
}

impl<'a, E: Executor + ?Sized> Pipeline<'a, E> {
    pub fn new(config: &'a HarnessConfig, executor: &'a E) -> Self {
        Pipeline { config, executor }
    }

    pub fn example(&self, name: &str) -> Example {
        Example::new(self.config, name)
    }

    /// `<build tool> -c <profile> <project dir>`. Never fatal: a broken build
    /// shows up as a missing artifact in [`Pipeline::compile`].
    pub fn build(&self, example: &Example) -> BuildOutcome {
        let started = SystemTime::now();
        let tool = &self.config.build_tool;
        let args = tool.args_with([
            "-c".to_string(),
            self.config.build_profile.clone(),
            example.project_dir().to_string_lossy().into_owned(),
        ]);
        info!("building {}", example.name);
        let code = match self.executor.execute(&tool.program, &args, None) {
            Ok(res) => {
                if !res.success() {
                    warn!("build of {} exited with {:?}", example.name, res.code);
                    debug!("build stderr:\n{}", res.stderr);
                }
                res.code
            }
            Err(e) => {
                warn!("build of {} not started: {:#}", example.name, anyhow::Error::from(e));
                None
            }
        };
        BuildOutcome { started, code }
    }

    // The script is replaced, never appended to.
    pub fn compile(&self, example: &Example, build: Option<&BuildOutcome>) -> HarnessResult<String> {
        let artifact = example.artifact_path();
        let meta = match fs::metadata(artifact) {
            Ok(m) if m.is_file() => m,
            _ => {
                return Err(HarnessError::MissingArtifact {
                    example: example.name.clone(),
                    path: artifact.to_path_buf(),
                })
            }
        };
        if let (Some(build), Ok(modified)) = (build, meta.modified()) {
            if modified < build.started {
                info!(
                    "{} predates the last build (up to date, or the build failed)",
                    artifact.display()
                );
            }
        }

        let compiler = &self.config.compiler;
        let args = compiler.args_with([artifact.to_string_lossy().into_owned()]);
        info!("compiling {}", example.name);
        let res = self.executor.execute(&compiler.program, &args, None)?;
        if !res.success() {
            return Err(HarnessError::CompilerFailure {
                example: example.name.clone(),
                code: res.code,
                stderr: res.stderr,
            });
        }

        let script = example.script_path();
        fs::write(&script, &res.stdout).map_err(|e| HarnessError::io(&script, e))?;
        Ok(res.stdout)
    }

    pub fn run(&self, example: &Example) -> HarnessResult<String> {
        let runtime = &self.config.runtime;
        let program = self
            .executor
            .resolve(&runtime.program)
            .ok_or_else(|| HarnessError::RuntimeUnavailable {
                runtime: runtime.program.clone(),
            })?;
        debug!("runtime resolved to {}", program.display());

        let input = example.input()?;
        let args = runtime.args_with([example.script_path().to_string_lossy().into_owned()]);
        info!("running {}.lua", example.name);
        let res = self.executor.execute(
            &program.to_string_lossy(),
            &args,
            Some(input.as_bytes()),
        )?;
        if !res.success() {
            return Err(HarnessError::RuntimeFailure {
                example: example.name.clone(),
                code: res.code,
                stderr: res.stderr,
            });
        }
        Ok(res.stdout)
    }
}
