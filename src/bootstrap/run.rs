//! Drives one signup through the controller from CLI arguments.

use al_core::SignupOutcome;
use tracing::info;

use super::wiring::AppRuntime;
use crate::cli::SignupArgs;

pub async fn run_signup(runtime: &AppRuntime, args: SignupArgs) -> anyhow::Result<SignupOutcome> {
    let controller = &runtime.controller;
    controller.set_name(args.name);
    controller.set_email(args.email);
    controller.set_password(args.password);

    let outcome = match controller.press_submit().await {
        Some(outcome) => outcome,
        // Nothing else drives this controller; wait for the turn anyway.
        None => controller.submit().await,
    };

    info!(
        outcome = outcome.kind(),
        user_id = ?outcome.user_id(),
        route = ?runtime.navigator.last_route(),
        "signup command finished"
    );
    Ok(outcome)
}
