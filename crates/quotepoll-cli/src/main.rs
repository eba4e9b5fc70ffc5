mod error;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quotepoll_core::config::{self, DEFAULT_ENDPOINT};
use quotepoll_core::{Poller, QuoteFeed, ReqwestHttpClient};

use crate::error::CliError;

/// Time between poll cycles.
const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Number of timer loops after the immediate first poll; the run window is
/// `POLL_CYCLES * POLL_INTERVAL`.
const POLL_CYCLES: u32 = 5;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let config = config::load_or(DEFAULT_ENDPOINT);
    info!(endpoint = %config.endpoint, "starting quote poller");

    let http = Arc::new(ReqwestHttpClient::new());
    let feed = QuoteFeed::new(config.endpoint, http);
    let poller = Poller::new(feed, POLL_INTERVAL);

    let (stop_tx, stop_rx) = oneshot::channel();
    let mut poller_task = tokio::spawn(poller.run(stop_rx));

    tokio::select! {
        _ = time::sleep(POLL_INTERVAL * POLL_CYCLES) => {
            let _ = stop_tx.send(());
            poller_task.await??;

            print!("The application has completed!");
            io::stdout().flush()?;
            Ok(ExitCode::SUCCESS)
        }
        // The poller only returns before the run window closes when a cycle
        // hit the fatal error variant.
        joined = &mut poller_task => {
            joined??;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
