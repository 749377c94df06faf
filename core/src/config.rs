//! Endpoint configuration.
//!
//! The endpoint is fixed configuration, never a per-call parameter. Hosts
//! build an `ApiConfig` once, either through the `with_*` setters or by
//! deserializing a JSON object in which every key is optional.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PATH: &str = "dinosaurs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Path of the list endpoint relative to `base_url`.
    pub path: String,
    /// Whole-request timeout applied by the transport.
    #[serde(rename = "timeout_secs", deserialize_with = "duration_from_secs")]
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("dino-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Parse a JSON config object. Absent keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_mock_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.path, "dinosaurs");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("dino-core/"));
    }

    #[test]
    fn setters_override_fields() {
        let config = ApiConfig::new("http://example.test")
            .with_path("v2/dinos")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("tests");
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.path, "v2/dinos");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let config = ApiConfig::from_json(r#"{"base_url":"http://x","timeout_secs":2}"#).unwrap();
        assert_eq!(config.base_url, "http://x");
        assert_eq!(config.path, "dinosaurs");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        assert!(ApiConfig::from_json(r#"{"timeout_secs":"soon"}"#).is_err());
    }
}
