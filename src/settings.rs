use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_csv_file() -> String {
    "transactions.csv".to_string()
}

fn default_currency() -> String {
    "AED".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_file: default_csv_file(),
            currency: default_currency(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tally")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| TallyError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            csv_file: "/tmp/spend.csv".to_string(),
            currency: "USD".to_string(),
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let loaded: Settings =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.csv_file, "/tmp/spend.csv");
        assert_eq!(loaded.currency, "USD");
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.csv_file, "transactions.csv");
        assert_eq!(s.currency, "AED");
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let json = r#"{"csv_file": "/tmp/spend.csv"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.csv_file, "/tmp/spend.csv");
        assert_eq!(s.currency, "AED");
    }
}
