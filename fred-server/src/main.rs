use std::process::ExitCode;

use fred::Fred;
use fred_server::{ServerError, Settings, logging, server};
use tokio::io::{BufReader, stdin, stdout};

async fn run() -> Result<(), ServerError> {
    let settings = Settings::from_env()?;
    let _guard = logging::init(&settings.log_level, &settings.log_file)?;

    tracing::info!(
        target: "fred::server",
        app = %settings.app_name,
        version = %settings.app_version,
        endpoint = %settings.api_endpoint,
        "starting"
    );
    tracing::debug!(target: "fred::server", ?settings, "loaded settings");
    if settings.api_key.is_empty() {
        tracing::warn!(target: "fred::server", "FRED_API_KEY is not set; upstream requests will likely be rejected");
    }

    let fred = Fred::from_config(&settings.to_fred_config())?;
    if fred.check_health().await {
        tracing::info!(target: "fred::server", "upstream API is reachable");
    } else {
        tracing::warn!(target: "fred::server", "upstream health check failed; serving anyway");
    }

    server::serve(&fred, BufReader::new(stdin()), stdout()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fred-mcp: {e}");
            ExitCode::FAILURE
        }
    }
}
