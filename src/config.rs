//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use crate::models::Runner;
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Populate the store with sample runners, runs and scores
    pub seed_sample_data: bool,
    /// The single local actor
    pub current_user: Runner,
}

impl Default for Config {
    fn default() -> Self {
        Self::test_default()
    }
}

impl Config {
    /// Default config for testing only. No sample data.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:8081".to_string(),
            seed_sample_data: false,
            current_user: default_current_user(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = default_current_user();

        Ok(Self {
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .trim()
                    .parse::<u16>()
                    .map_err(|_| ConfigError::Invalid("PORT", raw))?,
                Err(_) => 8080,
            },
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            seed_sample_data: match env::var("SEED_SAMPLE_DATA") {
                Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SEED_SAMPLE_DATA", raw))?,
                Err(_) => true,
            },
            current_user: Runner {
                id: non_empty_var("CURRENT_USER_ID").unwrap_or(defaults.id),
                name: non_empty_var("CURRENT_USER_NAME").unwrap_or(defaults.name),
                avatar: non_empty_var("CURRENT_USER_AVATAR").unwrap_or(defaults.avatar),
            },
        })
    }
}

fn default_current_user() -> Runner {
    Runner::new("me", "You", "🏃")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Env vars are process-wide; keep everything env-related in this one test.
        env::set_var("PORT", "9090");
        env::set_var("SEED_SAMPLE_DATA", "off");
        env::set_var("CURRENT_USER_NAME", "Riley");
        env::remove_var("CURRENT_USER_ID");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert!(!config.seed_sample_data);
        assert_eq!(config.current_user.name, "Riley");
        assert_eq!(config.current_user.id, "me");

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::set_var("SEED_SAMPLE_DATA", "maybe");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("SEED_SAMPLE_DATA", _)));

        env::remove_var("SEED_SAMPLE_DATA");
        env::remove_var("CURRENT_USER_NAME");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
