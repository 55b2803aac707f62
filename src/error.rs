use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type HarnessResult<T> = Result<T, HarnessError>;

/// Every failure the harness can hit. All of them are fatal: the invocation
/// stops, the message is printed and the process exits with status 1.
/// Output mismatches are not errors and never show up here.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("usage: csynth-examples <example|all>")]
    Usage,

    #[error("Example {name} not found\nAvailable examples: [{}]", available.join(", "))]
    UnknownExample { name: String, available: Vec<String> },

    #[error("cannot read examples root {}", root.display())]
    Registry { root: PathBuf, source: io::Error },

    #[error("build artifact for {example} not found at {} (did the build fail?)", path.display())]
    MissingArtifact { example: String, path: PathBuf },

    #[error("failed to launch {program}")]
    Spawn { program: String, source: io::Error },

    #[error("I/O error on {}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("compiler failed on {example} (exit {code:?})\n{stderr}")]
    CompilerFailure {
        example: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("No {runtime} executable found in path")]
    RuntimeUnavailable { runtime: String },

    #[error("Error running {example}.lua! (exit {code:?})\n{stderr}")]
    RuntimeFailure {
        example: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl HarnessError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
