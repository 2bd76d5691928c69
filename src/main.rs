use clap::Parser;
use dotenvy::dotenv;
use order_desk::{
    api::{Backend, HttpBackend},
    cli::{self, Cli, Desk},
    config,
    errors::Result,
    panels::{AssumeYes, Confirm, Outcome, StdinConfirm},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 1. Initialize tracing (as early as possible); stdout is reserved for panel output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    if dotenv().is_ok() {
        info!("Loaded .env file.");
    }

    let cli = Cli::parse();

    // 3. Resolve configuration: flag > BACKEND_URL > settings file > default
    let app_config = config::load_app_configuration(cli.backend_url.clone(), cli.config.as_deref())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&app_config.backend_url)?);
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };
    let desk = Desk::new(backend, confirm, app_config.currency);

    // 4. Run the command
    let output = cli::run(&desk, cli.command).await;
    print!("{}", output.text);
    if let Some(message) = &output.error {
        eprintln!("Error: {message}");
    }
    if let Some(message) = &output.warning {
        eprintln!("Warning: {message}");
    }

    Ok(if output.outcome == Outcome::Failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
