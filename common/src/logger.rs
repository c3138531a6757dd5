use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger. Writes to stderr so log lines never mix with the
/// board drawn on stdout.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        eprintln!("{}", self.format_line(message));
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.log(message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
