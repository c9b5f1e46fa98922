//! Where stackpad keeps its files on disk
//!
//! One per-user directory holds `config.yaml` and the `logs/` folder:
//! `$XDG_CONFIG_HOME/stackpad`, falling back to `~/.config/stackpad`
//! (`%APPDATA%\stackpad` on Windows).

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "stackpad";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Pick the stackpad directory from an explicit base or the home directory
///
/// An unset or empty base is ignored, as XDG requires.
fn resolve_app_dir(base: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    base.filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|base| base.join(APP_DIR))
}

/// The stackpad config directory, if the environment names one
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        resolve_app_dir(std::env::var_os("APPDATA"), None)
    }

    #[cfg(not(target_os = "windows"))]
    {
        resolve_app_dir(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory (and the config directory above it)
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}
