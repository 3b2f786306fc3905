//! Session settings.
//!
//! [`Settings`] holds the knobs a host can turn without touching the form
//! itself. It deserializes from JSON with every key optional, so hosts only
//! spell out what they change.
//!
//! ```rust
//! use formwright::Settings;
//!
//! let settings = Settings::from_json(r#"{"storage_key":"signup-form"}"#).unwrap();
//! assert_eq!(settings.storage_key, "signup-form");
//! assert!(!settings.pretty);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::persist::DEFAULT_STORAGE_KEY;

/// Runtime settings for a [`FormBuilder`](crate::FormBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Store key the configuration is saved under.
    pub storage_key: String,

    /// Whether saved configurations are indented.
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pretty: false,
        }
    }
}

impl Settings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from JSON. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| FormError::Deserialize(e.to_string()))
    }

    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets whether saved configurations are indented.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage_key, "formConfiguration");
        assert!(!settings.pretty);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_builder() {
        let settings = Settings::new().storage_key("a").pretty(true);
        assert_eq!(settings.storage_key, "a");
        assert!(settings.pretty);
    }

    #[test]
    fn test_bad_json() {
        assert!(Settings::from_json("[").is_err());
    }
}
