use std::path::{Path, PathBuf};

use super::Config;

/// Returns the config directory: `~/.config/rectlab/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("rectlab"))
}

/// Returns the config file path: `~/.config/rectlab/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the default scene path: `~/.config/rectlab/scene.toml`.
pub fn scene_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("scene.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    try_load_from(&path)
}

/// Tries to load and parse a config file at `path`.
///
/// Validation warnings are printed to stderr; they never fail the load.
pub fn try_load_from(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    for warning in config.validate() {
        eprintln!("Warning: {}: {warning}", path.display());
    }
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are reported
/// on stderr before falling back.
pub fn load() -> Config {
    load_or_default(config_path(), try_load_from, Config::default)
}

/// Loads a value from `path`, falling back to defaults.
fn load_or_default<T>(
    path: Option<PathBuf>,
    try_load: impl FnOnce(&Path) -> Result<T, String>,
    default: impl Fn() -> T,
) -> T {
    let Some(path) = path.filter(|p| p.exists()) else {
        return default();
    };
    match try_load(&path) {
        Ok(val) => val,
        Err(e) => {
            eprintln!("Warning: {e}");
            default()
        }
    }
}
