#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes `LEVEL target: message` lines to stderr so stdout stays clean for
/// reports.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by a `NQUEENS_LOG` value. Unset or unknown values mean `info`;
/// names are case-insensitive and `off` silences everything.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the stderr logger at the level taken from `NQUEENS_LOG` and
/// returns that level. A second call keeps the first logger.
pub fn init_logging() -> LevelFilter {
    let level = level_from_env(std::env::var(LOG_ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
