use std::time::Duration;

use al_core::AppConfig;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SupabaseConfigError {
    #[error("supabase url is empty")]
    MissingUrl,

    #[error("invalid supabase url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("supabase anon key is empty")]
    MissingAnonKey,

    #[error("profile table name is empty")]
    MissingProfileTable,

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Validated connection settings for the Supabase adapter.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub base_url: Url,
    pub anon_key: String,
    pub profile_table: String,
    pub request_timeout: Duration,
}

impl SupabaseConfig {
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SupabaseConfigError> {
        let raw_url = config.supabase_url.trim();
        if raw_url.is_empty() {
            return Err(SupabaseConfigError::MissingUrl);
        }
        let base_url = Url::parse(raw_url).map_err(|e| SupabaseConfigError::InvalidUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SupabaseConfigError::InvalidUrl {
                url: raw_url.to_string(),
                reason: format!("unsupported scheme {}", base_url.scheme()),
            });
        }

        if config.supabase_anon_key.trim().is_empty() {
            return Err(SupabaseConfigError::MissingAnonKey);
        }
        if config.profile_table.trim().is_empty() {
            return Err(SupabaseConfigError::MissingProfileTable);
        }
        if config.request_timeout_secs == 0 {
            return Err(SupabaseConfigError::ZeroTimeout);
        }

        Ok(Self {
            base_url,
            anon_key: config.supabase_anon_key.trim().to_string(),
            profile_table: config.profile_table.trim().to_string(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Absolute URL of `path` under the project URL, keeping any base path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(url: &str, key: &str) -> AppConfig {
        AppConfig {
            supabase_url: url.to_string(),
            supabase_anon_key: key.to_string(),
            ..AppConfig::empty()
        }
    }

    #[test]
    fn test_valid_config() {
        let config =
            SupabaseConfig::from_app_config(&app_config("https://xyz.supabase.co", " anon "))
                .unwrap();
        assert_eq!(config.anon_key, "anon");
        assert_eq!(config.profile_table, "users");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(
            config.endpoint("auth/v1/signup"),
            "https://xyz.supabase.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config =
            SupabaseConfig::from_app_config(&app_config("http://localhost:54321/proxy/", "anon"))
                .unwrap();
        assert_eq!(
            config.endpoint("/rest/v1/users"),
            "http://localhost:54321/proxy/rest/v1/users"
        );
    }

    #[test]
    fn test_missing_values_are_rejected() {
        assert_eq!(
            SupabaseConfig::from_app_config(&app_config("", "anon")).unwrap_err(),
            SupabaseConfigError::MissingUrl
        );
        assert_eq!(
            SupabaseConfig::from_app_config(&app_config("https://xyz.supabase.co", ""))
                .unwrap_err(),
            SupabaseConfigError::MissingAnonKey
        );

        let mut config = app_config("https://xyz.supabase.co", "anon");
        config.request_timeout_secs = 0;
        assert_eq!(
            SupabaseConfig::from_app_config(&config).unwrap_err(),
            SupabaseConfigError::ZeroTimeout
        );

        config.request_timeout_secs = 10;
        config.profile_table = " ".to_string();
        assert_eq!(
            SupabaseConfig::from_app_config(&config).unwrap_err(),
            SupabaseConfigError::MissingProfileTable
        );
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(
            SupabaseConfig::from_app_config(&app_config("not a url", "anon")),
            Err(SupabaseConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            SupabaseConfig::from_app_config(&app_config("ftp://xyz.supabase.co", "anon")),
            Err(SupabaseConfigError::InvalidUrl { .. })
        ));
    }
}
