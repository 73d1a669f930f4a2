use chrono::Local;
use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOG_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current_level) = LOG_LEVEL.lock() {
        *current_level = level;
    }
}

pub fn get_log_level() -> LogLevel {
    if let Ok(level) = LOG_LEVEL.lock() {
        *level
    } else {
        LogLevel::Warning
    }
}

/// Whether a message at `level` would be written.
pub fn enabled(level: LogLevel) -> bool {
    level >= get_log_level()
}

/// Write a message to stderr if it passes the current level.
///
/// Nothing is retained; stdout is left alone so that validation results can
/// be piped.
pub fn log(level: LogLevel, message: &str) {
    if enabled(level) {
        eprintln!("{}", format_line(level, message));
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S").to_string();
    format!("[{}] {} {}", timestamp, level.label(), message)
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
