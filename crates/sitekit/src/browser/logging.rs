//! Console logging setup.
//!
//! Runtime messages go through the `log` facade. In WASM, `console_log`
//! forwards them to the browser console; native builds install no logger.

use log::LevelFilter;
use sitekit_core::LogLevel;

/// Facade filter for a configured level.
#[must_use]
pub const fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Off => LevelFilter::Off,
    }
}

/// Install the console logger and apply `level`.
///
/// Safe to call on every mount; only the first call installs the logger.
pub fn init(level: LogLevel) {
    #[cfg(target_arch = "wasm32")]
    {
        // Already installed by an earlier mount.
        let _ = console_log::init_with_level(log::Level::Trace);
    }
    log::set_max_level(level_filter(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(level_filter(LogLevel::Info), LevelFilter::Info);
        assert_eq!(level_filter(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(level_filter(LogLevel::Error), LevelFilter::Error);
        assert_eq!(level_filter(LogLevel::Off), LevelFilter::Off);
    }

    #[test]
    fn test_default_level_hides_debug() {
        let filter = level_filter(LogLevel::default());
        assert!(log::Level::Warn <= filter);
        assert!(log::Level::Debug > filter);
    }

    #[test]
    fn test_init_sets_max_level() {
        init(LogLevel::Error);
        assert_eq!(log::max_level(), LevelFilter::Error);
    }
}
