#![cfg(feature = "std")]

//! Diagnostics on stderr. Stdout belongs to the game screen, so nothing here
//! ever writes to it.

use std::env;
use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the wanted level, e.g. `SEABATTLE_LOG=debug`.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

struct StderrSink {
    level: LevelFilter,
}

impl StderrSink {
    fn line(record: &Record) -> String {
        let target = record.module_path().unwrap_or_else(|| record.target());
        format!("{:<5} {}: {}", record.level(), target, record.args())
    }
}

impl Log for StderrSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        // A closed stderr has nowhere to report to.
        let _ = writeln!(err, "{}", Self::line(record));
        if record.level() == Level::Error {
            let _ = err.flush();
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Level named by `value`, or `default` when it is missing or unrecognized.
/// Names are the `log` ones (`off`, `error` .. `trace`), in any case.
fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Route `log` output to stderr at the level set in [`LOG_ENV`], falling
/// back to `default`. Only the first call in a process has any effect.
pub fn init_logging(default: LevelFilter) {
    let level = level_from(env::var(LOG_ENV).ok().as_deref(), default);
    if log::set_boxed_logger(Box::new(StderrSink { level })).is_ok() {
        log::set_max_level(level);
    }
}
