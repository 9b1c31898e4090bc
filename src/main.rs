//! Flag Fetcher - downloads Noto region flag SVGs for every two-letter code
//!
//! Features:
//! - Tries all 676 region codes (AA..ZZ) against the Noto waved-svg directory
//! - Saves found flags to ./flags as <CODE>.svg, skipping missing ones
//! - Keeps a bounded number of requests in flight
//! - Reports the saved count and total duration

mod download;
mod fetch;
mod region;
#[cfg(test)]
mod test_support;

use crate::download::{run, Settings, Summary};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let started = Instant::now();
    let settings = Settings::default();
    info!(
        "Downloading flags from {} into {:?}",
        settings.base_url, settings.out_dir
    );

    match run(&settings).await {
        Ok(summary) => {
            if let Err(e) = report(&summary, &mut std::io::stdout().lock()) {
                error!("Failed to write report: {}", e);
            }
        }
        Err(e) => error!("{}", e),
    }

    println!("Duration: {:.3?}", started.elapsed());
    std::process::exit(0);
}

/// Prints the saved count, or logs the first failure when anything failed
fn report(summary: &Summary, out: &mut impl Write) -> io::Result<()> {
    match summary.saved_count() {
        Some(count) => {
            writeln!(out)?;
            writeln!(out, "{} flags saved", count)?;
        }
        None => {
            if let Some(e) = summary.first_failure() {
                error!("{}", e);
            }
            if summary.failures.len() > 1 {
                writeln!(out, "{} of {} flags failed", summary.failures.len(), summary.total())?;
            }
        }
    }
    Ok(())
}
