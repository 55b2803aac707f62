use std::fs;
use std::path::Path;

use crate::error::{HarnessError, HarnessResult};

pub const ALL: &str = "all";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    One(String),
}

/// Names of the immediate subdirectories of `root`, in listing order.
pub fn discover(root: &Path) -> HarnessResult<Vec<String>> {
    let registry_err = |source| HarnessError::Registry {
        root: root.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(registry_err)? {
        let entry = entry.map_err(registry_err)?;
        // Follows symlinks, so a linked example directory still counts.
        if !entry.path().is_dir() {
            continue;
        }
        // Non-UTF-8 directory names cannot be typed on the command line anyway.
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

pub fn validate(name: &str, registry: &[String]) -> bool {
    registry.iter().any(|n| n == name)
}

/// Resolve a raw argument against the registry. The argument is trimmed and
/// lower-cased first.
pub fn select(arg: &str, registry: &[String]) -> HarnessResult<Selection> {
    let name = arg.trim().to_lowercase();
    if name == ALL {
        return Ok(Selection::All);
    }
    if validate(&name, registry) {
        Ok(Selection::One(name))
    } else {
        Err(HarnessError::UnknownExample {
            name,
            available: registry.to_vec(),
        })
    }
}
