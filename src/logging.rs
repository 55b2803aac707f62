use std::io::Write;

use env_logger::{Builder, Env};
use log::Level;

// Diagnostics go to stderr as `[CSYNTH][dbg] ...`; stdout is reserved for reports.
pub fn init() {
    Builder::from_env(Env::default().filter_or("CSYNTH_LOG", "warn"))
        .format(|buf, record| writeln!(buf, "[CSYNTH][{}] {}", tag(record.level()), record.args()))
        .init();
}

fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warn",
        Level::Info => "info",
        Level::Debug | Level::Trace => "dbg",
    }
}
