use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Heatmap cell rendering in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapStyle {
    /// Background shade proportional to the count.
    Shade,
    /// Plain numbers.
    Digits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Type used by `averages` when `--type` is omitted.
    #[serde(default = "default_averages_type")]
    pub averages_type: String,
    #[serde(default = "default_pairing_first_type")]
    pub pairing_first_type: String,
    #[serde(default = "default_pairing_second_type")]
    pub pairing_second_type: String,
    #[serde(default = "default_pairing_window")]
    pub pairing_window_minutes: i64,
    #[serde(default = "default_heatmap_style")]
    pub heatmap_style: HeatmapStyle,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_averages_type() -> String {
    "Feed".to_string()
}
fn default_pairing_first_type() -> String {
    "Feed".to_string()
}
fn default_pairing_second_type() -> String {
    "Diaper".to_string()
}
fn default_pairing_window() -> i64 {
    15
}
fn default_heatmap_style() -> HeatmapStyle {
    HeatmapStyle::Shade
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            averages_type: default_averages_type(),
            pairing_first_type: default_pairing_first_type(),
            pairing_second_type: default_pairing_second_type(),
            pairing_window_minutes: default_pairing_window(),
            heatmap_style: default_heatmap_style(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcarelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rcarelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcarelog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    /// Parse a YAML document; missing keys take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        if cfg.pairing_window_minutes < 0 {
            return Err(AppError::Config(format!(
                "pairing_window_minutes must not be negative (got {})",
                cfg.pairing_window_minutes
            )));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file (skipped in test mode).
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let config = Config::default();

        if is_test {
            success("Test mode: configuration file not written");
            return Ok(());
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        success(format!("Config file: {}", Self::config_file().display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_yields_defaults() {
        let cfg = Config::from_yaml("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.averages_type, "Feed");
        assert_eq!(cfg.pairing_window_minutes, 15);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let cfg = Config::from_yaml("averages_type: Pump\nheatmap_style: digits\n").unwrap();
        assert_eq!(cfg.averages_type, "Pump");
        assert_eq!(cfg.heatmap_style, HeatmapStyle::Digits);
        assert_eq!(cfg.pairing_second_type, "Diaper");
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config::default();
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_yaml("heatmap_style: rainbow\n").is_err());
        assert!(Config::from_yaml("pairing_window_minutes: -3\n").is_err());
    }
}
