use serde::Deserialize;

/// UI settings. Read once at startup and provided through context.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// How long a transient notice stays on screen
    pub notice_timeout_ms: u32,
    /// Delay before the type-ahead closes on blur, so a click on a suggestion lands first
    pub suggestion_blur_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "log_level": "debug",
    "notice_timeout_ms": 3000,
    "suggestion_blur_delay_ms": 200
}"#;

/// localStorage key holding a JSON override
pub const STORAGE_KEY: &str = "inventory.ui.config";

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            notice_timeout_ms: 3000,
            suggestion_blur_delay_ms: 200,
        }
    }
}

impl UiConfig {
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" | "warning" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Parse an override document. Missing fields keep their defaults.
pub fn parse_config(json: &str) -> Result<UiConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid UI config: {}", e))
}

fn embedded_config() -> UiConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration.
///
/// Search order:
/// 1. JSON override in localStorage
/// 2. Embedded default
///
/// Returns the config plus a warning when an override was present but unusable;
/// logging is not up yet when this runs.
pub fn load_config() -> (UiConfig, Option<String>) {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => match parse_config(&json) {
            Ok(config) => (config, None),
            Err(e) => (embedded_config(), Some(e)),
        },
        None => (embedded_config(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(parse_config(DEFAULT_CONFIG).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(r#"{"notice_timeout_ms": 5000}"#).unwrap();
        assert_eq!(config.notice_timeout_ms, 5000);
        assert_eq!(config.suggestion_blur_delay_ms, 200);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(parse_config("{not json").is_err());
        assert!(parse_config(r#"{"notice_timeout_ms": "soon"}"#).is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = UiConfig::default();
        config.log_level = "WARN".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "nonsense".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
