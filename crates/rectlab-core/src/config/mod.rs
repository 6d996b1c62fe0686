mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;

pub use loader::{config_dir, config_path, load, scene_path, try_load, try_load_from};

/// Top-level configuration for rectlab.
///
/// Loaded from `~/.config/rectlab/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How reports are printed.
    pub output: OutputConfig,
    /// Diagnostic logging.
    pub logging: LogConfig,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for reports.
    pub format: OutputFormat,
    /// Whether intersection reports list their crossing points and segments.
    pub describe_features: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            describe_features: true,
        }
    }
}

impl Config {
    /// Normalises values that have a restricted set of spellings.
    ///
    /// Returns a warning for every value that had to be replaced.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(level) = self.logging.validate() {
            warnings.push(format!(
                "unknown log level '{level}', using '{}'",
                self.logging.level
            ));
        }
        warnings
    }
}
