use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;

use crate::error::{HarnessError, HarnessResult};

/// Outcome of one finished child process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessResult {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Executor {
    /// Run `program` to completion. A nonzero exit is returned as a normal
    /// result; only a failure to launch is an error. With `stdin` unset the
    /// child gets no input at all.
    fn execute(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> HarnessResult<ProcessResult>;

    /// Locate `program` on the search path.
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// Spawns real processes and blocks until they exit. No timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<&[u8]>,
    ) -> HarnessResult<ProcessResult> {
        debug!("exec {} {}", program, args.join(" "));
        let spawn_err = |source| HarnessError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // Feed stdin from a helper thread so a child that fills its stdout
        // pipe before draining stdin cannot deadlock us.
        let output = thread::scope(|scope| {
            if let (Some(bytes), Some(mut pipe)) = (stdin, child.stdin.take()) {
                scope.spawn(move || {
                    // The child may exit without reading; a broken pipe is fine.
                    let _ = pipe.write_all(bytes);
                });
            }
            child.wait_with_output()
        })
        .map_err(spawn_err)?;

        let result = ProcessResult {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("{} exited with {:?}", program, result.code);
        Ok(result)
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
