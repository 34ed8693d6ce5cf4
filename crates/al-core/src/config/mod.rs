//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//!
//! Empty strings are valid facts here; the wiring layer decides whether
//! they are usable.

pub const DEFAULT_PROFILE_TABLE: &str = "users";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Project URL of the hosted backend, e.g. `https://xyz.supabase.co`
    pub supabase_url: String,

    /// Public anon key sent as `apikey`
    pub supabase_anon_key: String,

    /// Table holding the profile rows patched after signup
    pub profile_table: String,

    /// Per-request timeout of the HTTP client
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Missing keys fall back to the documented defaults; no value is
    /// checked for validity.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let supabase = toml_value.get("supabase");
        Ok(Self {
            supabase_url: supabase
                .and_then(|s| s.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            supabase_anon_key: supabase
                .and_then(|s| s.get("anon_key"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            profile_table: supabase
                .and_then(|s| s.get("profile_table"))
                .and_then(|v| v.as_str())
                .unwrap_or(DEFAULT_PROFILE_TABLE)
                .to_string(),
            request_timeout_secs: toml_value
                .get("network")
                .and_then(|n| n.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    /// Create empty AppConfig (empty credentials, default table and timeout)
    pub fn empty() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            profile_table: DEFAULT_PROFILE_TABLE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::empty()
    }
}
