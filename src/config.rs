use crate::api::{normalize_base_url, ApiError};
use crate::constants::{API_URL_ENV, DATA_DIR_ENV, DATA_DIR_NAME, DEFAULT_API_URL};
use std::path::PathBuf;

/// Runtime configuration resolved at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    /// Holds `session.dat`, the install salt and `settings.json`
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment, loading `.env` first if present
    pub fn from_env() -> Result<Self, ApiError> {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("[Config] Loaded {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("[Config] Ignoring unreadable .env: {}", e),
        }

        Self::from_values(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(DATA_DIR_ENV).ok(),
        )
    }

    fn from_values(api_url: Option<String>, data_dir: Option<String>) -> Result<Self, ApiError> {
        let api_url = api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = normalize_base_url(&api_url)?;

        let data_dir = data_dir
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Ok(Self { api_url, data_dir })
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(DATA_DIR_NAME);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config.api_url, "http://localhost:4000");
        assert!(config.data_dir.ends_with("soulmate"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://music.example.com/".into()),
            Some("/tmp/soulmate-test".into()),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://music.example.com");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/soulmate-test"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = AppConfig::from_values(Some("  ".into()), Some(String::new())).unwrap();
        assert_eq!(config.api_url, "http://localhost:4000");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = AppConfig::from_values(Some("localhost:4000".into()), None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
