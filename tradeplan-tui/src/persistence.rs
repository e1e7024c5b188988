//! Account preference — JSON save/load across restarts.
//!
//! The only persisted state is the account size, stored as a textual
//! decimal string. Missing or corrupt files fall back to the default;
//! loading never fails.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fallback account size when no preference has been saved yet.
pub const DEFAULT_ACCOUNT_SIZE: f64 = 10_000.0;

/// Serializable preference record shared with the CLI host.
#[derive(Debug, Serialize, Deserialize)]
pub struct Preferences {
    /// Account size as a decimal string, e.g. "25000".
    pub account_size: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            account_size: DEFAULT_ACCOUNT_SIZE.to_string(),
        }
    }
}

/// Preference path: `<config dir>/tradeplan/preferences.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradeplan")
        .join("preferences.json")
}

/// Load the persisted account size, defaulting on any failure.
pub fn load_account_size(path: &Path) -> f64 {
    let prefs = match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Preferences::default(),
    };
    prefs
        .account_size
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_ACCOUNT_SIZE)
}

/// Persist a new account size. Creates parent directories if needed.
pub fn save_account_size(path: &Path, account_size: f64) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let prefs = Preferences {
        account_size: account_size.to_string(),
    };
    let json = serde_json::to_string_pretty(&prefs)?;
    std::fs::write(path, json)?;
    Ok(())
}
