use std::path::{Path, PathBuf};

/// A program plus the arguments that always precede the per-call ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ToolCommand {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace. Quoting is not supported.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(ToolCommand::new(program, words))
    }

    pub fn args_with<I, S>(&self, extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = self.args.clone();
        args.extend(extra.into_iter().map(Into::into));
        args
    }
}

/// Everything a phase needs to know about the outside world. Values come
/// from `CSYNTH_*` variables, defaulting to the CSynth repository layout.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub examples_root: PathBuf,
    pub build_tool: ToolCommand,
    pub build_profile: String,
    pub target_framework: String,
    pub compiler: ToolCommand,
    pub runtime: ToolCommand,
}

impl HarnessConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let examples_root = root.into();
        let compiler = default_compiler(&examples_root);
        HarnessConfig {
            examples_root,
            build_tool: ToolCommand::new("dotnet", ["build"]),
            build_profile: "Release".to_string(),
            target_framework: "net8.0".to_string(),
            compiler,
            runtime: ToolCommand::new("lune", ["run"]),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let root = get("CSYNTH_EXAMPLES_ROOT").unwrap_or_else(|| "examples".to_string());
        let mut cfg = HarnessConfig::with_root(root.trim());

        if let Some(cmd) = get("CSYNTH_BUILD_TOOL").as_deref().and_then(ToolCommand::parse) {
            cfg.build_tool = cmd;
        }
        if let Some(profile) = get("CSYNTH_BUILD_PROFILE") {
            cfg.build_profile = profile.trim().to_string();
        }
        if let Some(tfm) = get("CSYNTH_TARGET_FRAMEWORK") {
            cfg.target_framework = tfm.trim().to_string();
        }
        if let Some(cmd) = get("CSYNTH_COMPILER").as_deref().and_then(ToolCommand::parse) {
            cfg.compiler = cmd;
        }
        if let Some(cmd) = get("CSYNTH_RUNTIME").as_deref().and_then(ToolCommand::parse) {
            cfg.runtime = cmd;
        }
        cfg
    }
}

// The CLI project sits at <repo>/src/CLI while examples live in <repo>/examples.
fn default_compiler(examples_root: &Path) -> ToolCommand {
    let project = examples_root
        .join("..")
        .join("src")
        .join("CLI")
        .join("CSynth.CLI.csproj");
    ToolCommand::new(
        "dotnet",
        [
            "run".to_string(),
            "--project".to_string(),
            project.to_string_lossy().into_owned(),
            "--".to_string(),
        ],
    )
}
