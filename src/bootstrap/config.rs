//! # Configuration loader
//!
//! Reads the TOML file into the `AppConfig` DTO. Values are accepted as they
//! are; checking them is the job of the adapter that consumes them
//! (`SupabaseConfig::from_app_config`).

use std::path::PathBuf;

use al_core::AppConfig;
use anyhow::Context;
use tracing::{debug, info};

const APP_DIR_NAME: &str = "alumo";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Default location: `<config dir>/alumo/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, the default path is used when
/// present, otherwise an empty config. Environment overrides apply last.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match explicit {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            load_config(path)?
        }
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => {
                info!(path = %path.display(), "loading default config");
                load_config(path)?
            }
            None => {
                debug!("no config file found, relying on environment");
                AppConfig::empty()
            }
        },
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Overlay `SUPABASE_URL` and `SUPABASE_ANON_KEY`. Empty values are ignored.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(url) = lookup(ENV_SUPABASE_URL).filter(|v| !v.trim().is_empty()) {
        debug!("{} overrides configured url", ENV_SUPABASE_URL);
        config.supabase_url = url;
    }
    if let Some(key) = lookup(ENV_SUPABASE_ANON_KEY).filter(|v| !v.trim().is_empty()) {
        debug!("{} overrides configured anon key", ENV_SUPABASE_ANON_KEY);
        config.supabase_anon_key = key;
    }
    config
}
