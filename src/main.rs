use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quake_tracker::config::Config;
use quake_tracker::pipeline;
use quake_tracker::service::catalog::CatalogClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    // Logs go to stderr; stdout carries prompts and the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let client = CatalogClient::from_config(&config).context("failed to set up catalog client")?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    match pipeline::run(&mut reader, &mut stdout, &client).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            debug!(?err, "tracker run failed");
            writeln!(stdout, "{}", err.user_message())?;
            stdout.flush()?;
            Ok(ExitCode::FAILURE)
        }
    }
}
