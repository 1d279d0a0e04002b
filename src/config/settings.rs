//! User settings for budget-tracker
//!
//! Manages user preferences: currency symbol and transaction history capacity.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::LedgerError;

/// User settings for budget-tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix printed before amounts (e.g. "Rs ")
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Maximum number of transactions kept per session (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_capacity: Option<usize>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            history_capacity: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Apply one-off command-line overrides
    pub fn with_overrides(
        mut self,
        currency_symbol: Option<String>,
        history_capacity: Option<usize>,
    ) -> Self {
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        if history_capacity.is_some() {
            self.history_capacity = history_capacity;
        }
        self
    }
}
