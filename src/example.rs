use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

pub const INPUT_FIXTURE: &str = "input.txt";
pub const EXPECTED_FIXTURE: &str = "output.txt";

/// One sample project under the examples root. Paths are fixed when the
/// value is built from the config and the example name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub name: String,
    project_dir: PathBuf,
    artifact: PathBuf,
}

impl Example {
    pub fn new(config: &HarnessConfig, name: &str) -> Self {
        let project_dir = config.examples_root.join(name);
        let artifact = project_dir
            .join("bin")
            .join(&config.build_profile)
            .join(&config.target_framework)
            .join(format!("{name}.dll"));
        Example {
            name: name.to_string(),
            project_dir,
            artifact,
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact
    }

    pub fn script_path(&self) -> PathBuf {
        self.project_dir.join(format!("{}.lua", self.name))
    }

    pub fn input_path(&self) -> PathBuf {
        self.project_dir.join(INPUT_FIXTURE)
    }

    pub fn expected_path(&self) -> PathBuf {
        self.project_dir.join(EXPECTED_FIXTURE)
    }

    /// Contents of `input.txt`, or an empty string when there is none.
    pub fn input(&self) -> HarnessResult<String> {
        Ok(read_optional(&self.input_path())?.unwrap_or_default())
    }

    /// Contents of `output.txt`; `None` means "nothing to compare against".
    pub fn expected_output(&self) -> HarnessResult<Option<String>> {
        read_optional(&self.expected_path())
    }
}

fn read_optional(path: &Path) -> HarnessResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HarnessError::io(path, e)),
    }
}
