//! Account preference — JSON load/save across invocations.
//!
//! The single persisted scalar is the account size, stored as a textual
//! decimal string. Missing or corrupt files fall back to the default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fallback account size when no preference has been saved yet.
pub const DEFAULT_ACCOUNT_SIZE: f64 = 10_000.0;

/// Serializable preference record.
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

/// Default preference path: `<config dir>/tradeplan/preferences.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradeplan")
        .join("preferences.json")
}

/// Load the persisted account size. Returns the default if the file is
/// missing, corrupt, or holds an unparseable number.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("tradeplan_prefs_test");
        let path = dir.join("preferences.json");

        save_account_size(&path, 25_000.0).unwrap();
        assert_eq!(load_account_size(&path), 25_000.0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_default() {
        let loaded = load_account_size(Path::new("/nonexistent/path/preferences.json"));
        assert_eq!(loaded, DEFAULT_ACCOUNT_SIZE);
    }

    #[test]
    fn corrupt_file_returns_default() {
        let dir = std::env::temp_dir().join("tradeplan_prefs_corrupt");
        let path = dir.join("preferences.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        assert_eq!(load_account_size(&path), DEFAULT_ACCOUNT_SIZE);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unparseable_number_returns_default() {
        let dir = std::env::temp_dir().join("tradeplan_prefs_badnum");
        let path = dir.join("preferences.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"account_size": "lots"}"#).unwrap();

        assert_eq!(load_account_size(&path), DEFAULT_ACCOUNT_SIZE);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn value_is_stored_as_a_string() {
        let dir = std::env::temp_dir().join("tradeplan_prefs_string");
        let path = dir.join("preferences.json");

        save_account_size(&path, 12_345.5).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""account_size": "12345.5""#));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
