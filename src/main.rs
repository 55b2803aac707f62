use std::io;

use clap::Parser;

mod compare;
mod config;
mod driver;
mod error;
mod example;
mod logging;
mod pipeline;
mod process;
mod registry;
mod report;
#[cfg(test)]
mod test_utils;

use config::HarnessConfig;
use error::HarnessError;
use process::SystemExecutor;
use report::Reporter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(name = "csynth-examples")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Compile CSynth examples to Luau, run them with lune and check their output")]
struct Cli {
    /// Example directory name, or `all` to verify every example
    example: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print and exit 0; anything malformed is a usage error
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{e}");
            std::process::exit(1);
        }
    };

    logging::init();
    let config = HarnessConfig::from_env();

    let Some(example) = cli.example else {
        return Err(HarnessError::Usage.into());
    };

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    driver::run(&config, &example, &SystemExecutor, &mut reporter)?;
    Ok(())
}
