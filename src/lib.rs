//! Alumo signup shell.
//!
//! Wires the signup use case to the Supabase adapter and a terminal
//! front end.

pub mod adapters;
pub mod bootstrap;
pub mod cli;

use al_core::SignupOutcome;

use crate::bootstrap::{build_runtime, resolve_config, run_signup};
use crate::cli::{Cli, Command};

/// Execute one CLI invocation and return the signup outcome.
pub async fn run(cli: Cli) -> anyhow::Result<SignupOutcome> {
    let config = resolve_config(cli.config.clone())?;
    let runtime = build_runtime(&config)?;

    match cli.command {
        Command::Signup(args) => run_signup(&runtime, args).await,
    }
}
