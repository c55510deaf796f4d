//! Console Logger
//!
//! `log` backend for the browser. Lines look like
//! `12:04:31.207 INFO [Koboland] [VOTE] like on post 12` and are routed to the
//! matching `console` method so devtools level filters keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let message = record.args().to_string();
        let line = format_line(&timestamp, record.level(), &self.app_name, &message);
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug => web_sys::console::debug_1(&line.into()),
        Level::Trace => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Format one log line
pub fn format_line(timestamp: &str, level: Level, app_name: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, app_name, message)
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the console logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger {
        app_name: app_name.to_string(),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}
