//! Download orchestration - fetches every region flag through a bounded pool
//! and folds the per-flag outcomes into a summary.

use crate::fetch::{FetchError, FlagFetcher, Outcome};
use crate::region::{self, RegionCode};
use futures_util::{stream, StreamExt};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const BASE_URL: &str =
    "https://raw.githubusercontent.com/googlefonts/noto-emoji/main/third_party/region-flags/waved-svg";
const OUTPUT_DIR: &str = "./flags";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_IN_FLIGHT: usize = 32;

/// Where to download from, where to write, and how hard to push the host
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    /// Maximum number of requests in flight at once
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            out_dir: PathBuf::from(OUTPUT_DIR),
            timeout: REQUEST_TIMEOUT,
            concurrency: MAX_IN_FLIGHT,
        }
    }
}

/// Errors that prevent a download run from starting
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-outcome tally of a download run
#[derive(Debug, Default)]
pub struct Summary {
    pub saved: usize,
    pub not_found: usize,
    /// Failed fetches in completion order
    pub failures: Vec<(RegionCode, FetchError)>,
}

impl Summary {
    fn record(&mut self, code: RegionCode, result: Result<Outcome, FetchError>) {
        match result {
            Ok(Outcome::Saved) => self.saved += 1,
            Ok(Outcome::NotFound) => self.not_found += 1,
            Err(e) => {
                tracing::debug!("Fetching {} failed: {}", code, e);
                self.failures.push((code, e));
            }
        }
    }

    /// Number of saved flags, only meaningful when nothing failed
    pub fn saved_count(&self) -> Option<usize> {
        self.failures.is_empty().then_some(self.saved)
    }

    /// First failure observed during the run
    pub fn first_failure(&self) -> Option<&FetchError> {
        self.failures.first().map(|(_, e)| e)
    }

    pub fn total(&self) -> usize {
        self.saved + self.not_found + self.failures.len()
    }
}

/// Downloads every region flag into `settings.out_dir`.
/// Every fetch runs to completion even after another one failed, so flags
/// already written stay on disk.
pub async fn run(settings: &Settings) -> Result<Summary, DownloadError> {
    tokio::fs::create_dir_all(&settings.out_dir)
        .await
        .map_err(|source| DownloadError::OutputDir {
            path: settings.out_dir.clone(),
            source,
        })?;

    let fetcher = &FlagFetcher::new(&settings.base_url, &settings.out_dir, settings.timeout);

    let mut results = stream::iter(region::all())
        .map(move |code| async move { (code, fetcher.fetch(code).await) })
        .buffer_unordered(settings.concurrency.max(1));

    let mut summary = Summary::default();
    while let Some((code, result)) = results.next().await {
        summary.record(code, result);
    }

    tracing::debug!(
        "{} saved, {} not found, {} failed",
        summary.saved,
        summary.not_found,
        summary.failures.len()
    );
    Ok(summary)
}
