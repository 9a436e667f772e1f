use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::ledger::HISTORY_LIMIT;

/// Runtime configuration for a tracker instance.
///
/// Every field has a default, so a partial JSON document (or none at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage key holding the full ledger snapshot.
    pub ledger_key: String,

    /// Storage key holding the session marker.
    pub session_key: String,

    /// Maximum number of transactions kept in the history.
    pub history_limit: usize,

    /// Prefix used when formatting amounts for display (e.g., "$", "€").
    pub currency_symbol: String,

    /// Name of the current offline asset cache. Older caches are dropped on activation.
    pub cache_name: String,

    /// Assets pre-populated into the offline cache at install time.
    pub shell_assets: Vec<String>,

    /// Cached document served when a navigation request cannot be fetched.
    pub root_document: String,

    /// Export files are named `{export_prefix}-YYYY-MM-DD.json`.
    pub export_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_key: "finance_tracker_data".to_string(),
            session_key: "finance_tracker_session".to_string(),
            history_limit: HISTORY_LIMIT,
            currency_symbol: "$".to_string(),
            cache_name: "finance-tracker-v1".to_string(),
            shell_assets: vec![
                "/".to_string(),
                "/index.html".to_string(),
                "/manifest.json".to_string(),
                "/icon-192.png".to_string(),
                "/icon-512.png".to_string(),
            ],
            root_document: "/".to_string(),
            export_prefix: "finance-tracker".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidSettings(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can drive a tracker.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.ledger_key.trim().is_empty() || self.session_key.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "storage keys must not be empty".into(),
            ));
        }
        if self.ledger_key == self.session_key {
            return Err(CoreError::InvalidSettings(format!(
                "ledger and session keys must differ (both are '{}')",
                self.ledger_key
            )));
        }
        if self.history_limit == 0 {
            return Err(CoreError::InvalidSettings(
                "history_limit must be at least 1".into(),
            ));
        }
        if self.export_prefix.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "export_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}
