use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STARTING_NOTICE_MS: u64 = 2000;
pub const MIN_NOTICE_MS: u64 = 500;
pub const MAX_NOTICE_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings the shell hands to the core when the screen mounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// False on platforms without camera hardware control (e.g. web).
    pub platform_supports_camera: bool,
    /// Ask for the permission during launch when the OS still allows asking.
    pub request_on_launch: bool,
    pub starting_notice_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            platform_supports_camera: true,
            request_on_launch: true,
            starting_notice_ms: DEFAULT_STARTING_NOTICE_MS,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn for_platform(platform_supports_camera: bool) -> Self {
        Self {
            platform_supports_camera,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    #[must_use]
    pub fn without_launch_request(mut self) -> Self {
        self.request_on_launch = false;
        self
    }

    #[must_use]
    pub fn with_starting_notice_ms(mut self, ms: u64) -> Self {
        self.starting_notice_ms = ms.clamp(MIN_NOTICE_MS, MAX_NOTICE_MS);
        self
    }

    #[must_use]
    pub fn validated(mut self) -> Self {
        self.starting_notice_ms = self.starting_notice_ms.clamp(MIN_NOTICE_MS, MAX_NOTICE_MS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.platform_supports_camera);
        assert!(config.request_on_launch);
        assert_eq!(config.starting_notice_ms, DEFAULT_STARTING_NOTICE_MS);
    }

    #[test]
    fn test_for_platform() {
        assert!(!AppConfig::for_platform(false).platform_supports_camera);
        assert!(AppConfig::for_platform(true).platform_supports_camera);
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{"platform_supports_camera": false}"#).unwrap();
        assert!(!config.platform_supports_camera);
        assert!(config.request_on_launch);
        assert_eq!(config.starting_notice_ms, DEFAULT_STARTING_NOTICE_MS);
    }

    #[test]
    fn test_from_json_clamps_notice() {
        let config = AppConfig::from_json(r#"{"starting_notice_ms": 1}"#).unwrap();
        assert_eq!(config.starting_notice_ms, MIN_NOTICE_MS);

        let config = AppConfig::from_json(r#"{"starting_notice_ms": 999999}"#).unwrap();
        assert_eq!(config.starting_notice_ms, MAX_NOTICE_MS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(AppConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::default()
            .without_launch_request()
            .with_starting_notice_ms(50_000);
        assert!(!config.request_on_launch);
        assert_eq!(config.starting_notice_ms, MAX_NOTICE_MS);
    }
}
