use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{HarnessConfig, ToolCommand};
use crate::error::HarnessResult;
use crate::process::{Executor, ProcessResult};

pub const BUILD: &str = "fake-dotnet-build";
pub const COMPILER: &str = "fake-csynth";
pub const RUNTIME: &str = "fake-lune";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<Vec<u8>>,
}

impl Call {
    pub fn last_arg(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }
}

type Handler = Box<dyn Fn(&Call) -> ProcessResult>;

// Records every invocation and answers it with `handler`.
pub struct FakeExecutor {
    pub calls: RefCell<Vec<Call>>,
    handler: Handler,
    runtime_installed: bool,
}

impl FakeExecutor {
    pub fn new(handler: impl Fn(&Call) -> ProcessResult + 'static) -> Self {
        FakeExecutor {
            calls: RefCell::new(Vec::new()),
            handler: Box::new(handler),
            runtime_installed: true,
        }
    }

    pub fn without_runtime(mut self) -> Self {
        self.runtime_installed = false;
        self
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }

    pub fn calls_to(&self, program: &str) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .cloned()
            .collect()
    }
}

impl Executor for FakeExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> HarnessResult<ProcessResult> {
        let call = Call {
            program: program.to_string(),
            args: args.to_vec(),
            stdin: stdin.map(<[u8]>::to_vec),
        };
        let res = (self.handler)(&call);
        self.calls.borrow_mut().push(call);
        Ok(res)
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        (program == RUNTIME && self.runtime_installed).then(|| PathBuf::from(program))
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ok(stdout: &str) -> ProcessResult {
    ProcessResult {
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn fail(code: i32, stderr: &str) -> ProcessResult {
    ProcessResult {
        code: Some(code),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

pub fn fake_config(root: &Path) -> HarnessConfig {
    let mut cfg = HarnessConfig::with_root(root);
    cfg.build_tool = ToolCommand::new(BUILD, ["build"]);
    cfg.compiler = ToolCommand::new(COMPILER, Vec::<String>::new());
    cfg.runtime = ToolCommand::new(RUNTIME, ["run"]);
    cfg
}

/// Lay out `<root>/<name>/` with a built artifact whose content is `artifact`.
pub fn add_example(cfg: &HarnessConfig, name: &str, artifact: &str) {
    let dll = crate::example::Example::new(cfg, name).artifact_path().to_path_buf();
    if let Some(parent) = dll.parent() {
        fs::create_dir_all(parent).expect("create artifact dir");
    }
    fs::write(dll, artifact).expect("write artifact");
}
