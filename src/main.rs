use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use alumo_lib::bootstrap::tracing::init_tracing_subscriber;
use alumo_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional; real environment variables win over it
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match alumo_lib::run(cli).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            error!(error = %err, "alumo failed to start");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
