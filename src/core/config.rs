//! Application configuration.
//!
//! Values are read from the build environment (`option_env!`) so the server
//! binary and the WASM bundle agree on them:
//!
//! - `AGENTICOS_API_BASE_URL` - backend base URL (default `http://localhost:8000`)
//! - `AGENTICOS_SESSION_TTL_SECS` - session lifetime in seconds; unset or `0`
//!   keeps sessions until logout

use chrono::Duration;

use super::session::SessionPolicy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Client-side configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the automation backend
    pub api_base_url: String,

    /// Session lifetime policy
    pub session_policy: SessionPolicy,
}

impl ClientConfig {
    /// Configuration baked in at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("AGENTICOS_API_BASE_URL"),
            option_env!("AGENTICOS_SESSION_TTL_SECS"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, session_ttl_secs: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        Self {
            api_base_url,
            session_policy: SessionPolicy {
                max_age: parse_session_ttl(session_ttl_secs),
            },
        }
    }

    /// Check if sessions expire
    pub fn has_session_ttl(&self) -> bool {
        self.session_policy.max_age.is_some()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Parse a TTL in seconds. Missing, zero or unparsable values disable expiry.
pub fn parse_session_ttl(raw: Option<&str>) -> Option<Duration> {
    let secs: i64 = raw?.trim().parse().ok()?;
    (secs > 0).then(|| Duration::seconds(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_values(None, None);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.has_session_ttl());
        assert_eq!(config.session_policy, SessionPolicy::never_expires());
    }

    #[test]
    fn test_config_with_all_values() {
        let config = ClientConfig::from_values(Some("https://api.agentic.dev"), Some("3600"));

        assert_eq!(config.api_base_url, "https://api.agentic.dev");
        assert_eq!(config.session_policy.max_age, Some(Duration::hours(1)));
        assert!(config.has_session_ttl());
    }

    #[test]
    fn test_config_with_empty_base_url() {
        let config = ClientConfig::from_values(Some("  "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_parse_session_ttl() {
        assert_eq!(parse_session_ttl(None), None);
        assert_eq!(parse_session_ttl(Some("0")), None);
        assert_eq!(parse_session_ttl(Some("-5")), None);
        assert_eq!(parse_session_ttl(Some("abc")), None);
        assert_eq!(parse_session_ttl(Some(" 90 ")), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_config_from_build_env_returns_config() {
        // Values depend on the build environment
        let config = ClientConfig::from_build_env();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_config_clone() {
        let config = ClientConfig::from_values(Some("http://backend:8000"), Some("60"));
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
