//! App Configuration
//!
//! Defaults can be overridden by a JSON `data-config` attribute on `<body>`.

use log::LevelFilter;
use serde::Deserialize;

/// Key under which the task list is persisted
pub const STORAGE_KEY: &str = "todo.items";

/// Runtime settings for the to-do app
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Local storage key for the serialized task list
    pub storage_key: String,
    /// Minimum number of characters in a task after trimming
    pub min_task_chars: usize,
    /// How long a toast stays visible
    pub toast_duration_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            min_task_chars: 2,
            toast_duration_ms: 1500,
            log_level: LevelFilter::Info,
        }
    }
}

impl TodoConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read `<body data-config="...">`. No attribute means defaults.
    pub fn from_document() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-config"));

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.storage_key, "todo.items");
        assert_eq!(config.min_task_chars, 2);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TodoConfig::from_json(r#"{"toast_duration_ms": 300, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 300);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_level_names_ignore_case() {
        let config = TodoConfig::from_json(r#"{"log_level": "WARN"}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
        let config = TodoConfig::from_json(r#"{"log_level": "off"}"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Off);
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(TodoConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }
}
