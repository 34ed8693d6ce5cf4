//! Startup: configuration, tracing and adapter wiring.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{apply_env_overrides, load_config, resolve_config};
pub use run::run_signup;
pub use wiring::{build_runtime, AppRuntime};
