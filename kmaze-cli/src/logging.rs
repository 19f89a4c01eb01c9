use std::sync::{OnceLock, RwLock};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::Level::Warn))
}

/// Installs the logger. Only the first call has any effect on which logger is used,
/// every call updates the minimum level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags to a level.
pub fn level_from_verbosity(verbose: u8) -> log::Level {
    match verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    pub fn format(record: &Record) -> String {
        format!(
            "[{:<5}] {} -> {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), log::Level::Warn);
        assert_eq!(level_from_verbosity(2), log::Level::Debug);
        assert_eq!(level_from_verbosity(9), log::Level::Trace);
    }

    #[test]
    fn filters_by_level() {
        let logger = AppLogger::new(log::Level::Info);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();

        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        logger.set_min_level(log::Level::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn message_format() {
        let line = AppLogger::format(
            &Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Info)
                .module_path(Some("kmaze::game"))
                .build(),
        );
        assert_eq!(line, "[INFO ] kmaze::game -> hello");
    }
}
