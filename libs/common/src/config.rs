//! Client configuration loaded from the environment

use anyhow::Result;
use std::path::PathBuf;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the StudySync API, without a trailing slash
    pub api_base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Directory holding persisted client state (session token and user)
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `STUDYSYNC_API_URL`: API base URL (default: "http://localhost:8000")
    /// - `STUDYSYNC_REQUEST_TIMEOUT`: Request timeout in seconds (default: 30)
    /// - `STUDYSYNC_DATA_DIR`: Directory for persisted state (default: ".studysync")
    pub fn from_env() -> Result<Self> {
        let api_base_url = std::env::var("STUDYSYNC_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs = std::env::var("STUDYSYNC_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let data_dir = std::env::var("STUDYSYNC_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".studysync"));

        Ok(ClientConfig {
            api_base_url,
            request_timeout_secs,
            data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_config_defaults() {
        unsafe {
            std::env::remove_var("STUDYSYNC_API_URL");
            std::env::remove_var("STUDYSYNC_REQUEST_TIMEOUT");
            std::env::remove_var("STUDYSYNC_DATA_DIR");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.data_dir, PathBuf::from(".studysync"));
    }

    #[test]
    #[serial]
    fn test_client_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("STUDYSYNC_API_URL", "https://api.studysync.example/");
            std::env::set_var("STUDYSYNC_REQUEST_TIMEOUT", "5");
            std::env::set_var("STUDYSYNC_DATA_DIR", "/tmp/studysync-state");
        }

        let config = ClientConfig::from_env().unwrap();
        // Trailing slash is trimmed so path joining stays predictable
        assert_eq!(config.api_base_url, "https://api.studysync.example");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/studysync-state"));

        unsafe {
            std::env::remove_var("STUDYSYNC_API_URL");
            std::env::remove_var("STUDYSYNC_REQUEST_TIMEOUT");
            std::env::remove_var("STUDYSYNC_DATA_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_client_config_invalid_timeout_falls_back() {
        unsafe {
            std::env::set_var("STUDYSYNC_REQUEST_TIMEOUT", "not-a-number");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.request_timeout_secs, 30);

        unsafe {
            std::env::remove_var("STUDYSYNC_REQUEST_TIMEOUT");
        }
    }
}
