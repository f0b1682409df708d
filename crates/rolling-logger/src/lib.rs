//! Rolling Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! (stderr when not on wasm32) and the most recent lines are kept in a
//! circular buffer so the UI can show what happened without devtools open.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of formatted lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Console logger with a bounded history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Format one record as `HH:MM:SS.mmm LEVEL [target] message`
    pub fn format(record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn remember(&self, line: String) {
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|b| b.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

/// Install the global logger. Only the first call wins.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Parse a level name, falling back to `Info`
pub fn level_from_str(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Recent lines from the installed logger (empty before `init`)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_to(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Debug, 3);
        for i in 0..5 {
            log_to(&logger, Level::Info, &format!("line {}", i));
        }
        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[test] line 2"));
        assert!(lines[2].ends_with("[test] line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        log_to(&logger, Level::Info, "quiet");
        log_to(&logger, Level::Error, "loud");
        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("loud"));
    }

    #[test]
    fn test_clear_and_zero_capacity() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        log_to(&logger, Level::Info, "a");
        log_to(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
        logger.clear();
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("debug"), LevelFilter::Debug);
        assert_eq!(level_from_str(" WARN "), LevelFilter::Warn);
        assert_eq!(level_from_str("nonsense"), LevelFilter::Info);
    }
}
