//! Stderr logger for the `log` facade
//!
//! The level comes from `LOG_LEVEL` (or `LEVEL`): `debug`, `info` or `warn`.
//! Anything else logs errors only.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "level={} target={} msg={}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Level filter named by the environment
pub fn level_from_env() -> LevelFilter {
    let value = std::env::var("LOG_LEVEL")
        .or_else(|_| std::env::var("LEVEL"))
        .unwrap_or_default();
    parse_level(&value)
}

fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        _ => LevelFilter::Error,
    }
}

/// Install the logger; later calls only adjust the level
pub fn init(level: LevelFilter) {
    // Fails only when a logger is already installed; the level still applies
    log::set_logger(&LOGGER).ok();
    log::set_max_level(level);
}
