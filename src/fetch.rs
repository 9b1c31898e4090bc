//! Flag fetch module - downloads one flag SVG and persists it.
//! Missing flags (404) are a normal outcome, not an error.

use crate::region::RegionCode;
use futures_util::StreamExt;
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Result of a successful fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Flag was written to disk
    Saved,
    /// Remote host has no flag for this region code
    NotFound,
}

/// Errors that can occur while fetching a flag
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Rate limited, wait {retry_after} seconds before retrying")]
    RateLimited { retry_after: String },
    #[error("Unexpected {status} status code for {glyph} flag")]
    UnexpectedStatus { status: StatusCode, glyph: String },
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads flags from a remote directory into a local one
#[derive(Debug, Clone)]
pub struct FlagFetcher {
    client: reqwest::Client,
    base_url: String,
    out_dir: PathBuf,
    timeout: Duration,
}

impl FlagFetcher {
    pub fn new(base_url: &str, out_dir: &Path, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            out_dir: out_dir.to_path_buf(),
            timeout,
        }
    }

    /// Remote URL for a region code
    pub fn url_for(&self, code: RegionCode) -> String {
        format!("{}/{}", self.base_url, code.remote_name())
    }

    /// Local path for a region code
    pub fn path_for(&self, code: RegionCode) -> PathBuf {
        self.out_dir.join(code.file_name())
    }

    /// Fetches a single flag, writing it to disk on 200.
    /// An existing file with the same name is overwritten; a download that
    /// fails midway removes the partial file.
    pub async fn fetch(&self, code: RegionCode) -> Result<Outcome, FetchError> {
        let response = self
            .client
            .get(self.url_for(code))
            .timeout(self.timeout)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                tracing::debug!("No flag for {}", code);
                return Ok(Outcome::NotFound);
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown")
                    .to_string();
                return Err(FetchError::RateLimited { retry_after });
            }
            status => {
                return Err(FetchError::UnexpectedStatus {
                    status,
                    glyph: code.glyph(),
                });
            }
        }

        let path = self.path_for(code);
        if let Err(e) = write_body(response, &path).await {
            // Don't leave a truncated SVG behind
            let _ = tokio::fs::remove_file(&path).await;
            return Err(e);
        }

        tracing::info!("{} {} flag has been saved", code.glyph(), code);
        Ok(Outcome::Saved)
    }
}

async fn write_body(response: reqwest::Response, path: &Path) -> Result<(), FetchError> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}
