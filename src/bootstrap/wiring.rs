//! Dependency wiring: builds the signup controller from configuration.

use std::sync::Arc;

use al_app::SignupController;
use al_core::AppConfig;
use al_infra::{SupabaseAuthProvider, SupabaseConfig};
use anyhow::Context;
use tracing::info;

use crate::adapters::terminal::{TerminalAlertPresenter, TerminalNavigator};

/// Everything a CLI invocation needs.
pub struct AppRuntime {
    pub controller: Arc<SignupController>,
    pub navigator: Arc<TerminalNavigator>,
    pub alerts: Arc<TerminalAlertPresenter>,
}

/// Validate the Supabase settings and assemble the adapters.
pub fn build_runtime(config: &AppConfig) -> anyhow::Result<AppRuntime> {
    let supabase =
        SupabaseConfig::from_app_config(config).context("Invalid Supabase configuration")?;
    info!(
        url = %supabase.base_url,
        profile_table = %supabase.profile_table,
        timeout_secs = supabase.request_timeout.as_secs(),
        "wiring Supabase auth provider"
    );
    let auth = SupabaseAuthProvider::new(supabase).context("Failed to build HTTP client")?;

    let navigator = Arc::new(TerminalNavigator::new());
    let alerts = Arc::new(TerminalAlertPresenter::new());
    let controller = Arc::new(SignupController::new(
        Arc::new(auth),
        navigator.clone(),
        alerts.clone(),
    ));

    Ok(AppRuntime {
        controller,
        navigator,
        alerts,
    })
}
