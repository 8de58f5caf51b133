use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format(message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Writes through the installed logger. Messages sent before `init_logger` are dropped,
/// so library code can log unconditionally.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
