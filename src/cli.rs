//! Command line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "alumo", version, about = "Create an Alumo account")]
pub struct Cli {
    /// Path of the TOML config file
    #[arg(long, global = true, env = "ALUMO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new account and set its profile name
    Signup(SignupArgs),
}

/// Form fields. Missing values are submitted empty and rejected by the
/// signup validation, not by the argument parser.
#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Full name stored on the profile
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, env = "ALUMO_PASSWORD", hide_env_values = true, default_value = "")]
    pub password: String,
}
