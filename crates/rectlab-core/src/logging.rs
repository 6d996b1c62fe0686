//! Logging configuration.
//!
//! The library only emits records through the `log` facade. The binary
//! turns a [`LogConfig`] into a filter for whichever logger it installs;
//! `RUST_LOG` still takes precedence there.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Accepted values for [`LogConfig::level`].
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
        }
    }
}

impl LogConfig {
    /// Normalises the level name, falling back to "info" when unknown.
    ///
    /// Returns the rejected name so the caller can report it.
    pub fn validate(&mut self) -> Option<String> {
        let level = self.level.trim().to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            self.level = level;
            None
        } else {
            Some(std::mem::replace(&mut self.level, "info".into()))
        }
    }

    /// The filter this configuration asks for.
    pub fn filter(&self) -> LevelFilter {
        if !self.enabled {
            return LevelFilter::Off;
        }
        parse_level(&self.level)
    }
}

fn parse_level(s: &str) -> LevelFilter {
    match s.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
