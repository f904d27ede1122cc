//! User settings for Tally
//!
//! Manages user preferences: the savings interest rate, the currency symbol
//! used in reports and the width of the visual summary bars.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;

/// User settings for Tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Per-period compound rate applied to the savings balance
    #[serde(default = "default_interest_rate")]
    pub savings_interest_rate: f64,

    /// Currency symbol used by the savings report
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Maximum bar length of the visual summary
    #[serde(default = "default_bar_width")]
    pub summary_bar_width: usize,
}

fn default_interest_rate() -> f64 {
    0.05
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_bar_width() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            savings_interest_rate: default_interest_rate(),
            currency_symbol: default_currency(),
            summary_bar_width: default_bar_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TallyError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the projections and bar chart cannot work with
    pub fn validate(&self) -> Result<(), TallyError> {
        if !self.savings_interest_rate.is_finite() || self.savings_interest_rate < 0.0 {
            return Err(TallyError::Config(format!(
                "savings_interest_rate must be a non-negative number, got {}",
                self.savings_interest_rate
            )));
        }
        if self.summary_bar_width == 0 {
            return Err(TallyError::Config(
                "summary_bar_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.savings_interest_rate, 0.05);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.summary_bar_width, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"savings_interest_rate": 0.01, "currency_symbol": "€", "summary_bar_width": 20}"#,
        )
        .unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(
            loaded,
            Settings {
                savings_interest_rate: 0.01,
                currency_symbol: "€".into(),
                summary_bar_width: 20,
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"savings_interest_rate": 0.02}"#).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.savings_interest_rate, 0.02);
        assert_eq!(loaded.summary_bar_width, 50);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"savings_interest_rate": -0.5}"#).unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }

    #[test]
    fn test_zero_bar_width_rejected() {
        let settings = Settings {
            summary_bar_width: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
