//! Thumbnail download with retry and backoff.
//!
//! The thumbnail is streamed into the caller's scratch directory so that
//! c2patool can pick it up by path.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use backoff::{retry_notify, ExponentialBackoff};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::config::{ToolConfig, MAX_THUMBNAIL_RETRIES, MAX_THUMBNAIL_TIMEOUT};
use crate::error::{NumbersC2paError, Result};
use crate::manifest::Thumbnail;

/// File name of the staged thumbnail
pub const THUMBNAIL_FILE: &str = "thumbnail.jpg";

/// MIME type recorded for the staged thumbnail
pub const THUMBNAIL_FORMAT: &str = "image/jpeg";

const INITIAL_RETRY_INTERVAL: Duration = Duration::from_millis(250);
const MAX_RETRY_INTERVAL: Duration = Duration::from_secs(5);

pub struct ThumbnailFetcher {
    client: Client,
    timeout: Duration,
    retries: u32,
}

impl ThumbnailFetcher {
    pub fn new(config: &ToolConfig) -> Result<Self> {
        let timeout = config.thumbnail_timeout.min(MAX_THUMBNAIL_TIMEOUT);
        let retries = config.thumbnail_retries.min(MAX_THUMBNAIL_RETRIES);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                NumbersC2paError::ThumbnailFetch(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            timeout,
            retries,
        })
    }

    /// Download `url` into `dir` and describe it as a manifest thumbnail.
    pub fn fetch_into(&self, url: &str, dir: &Path) -> Result<Thumbnail> {
        let path = dir.join(THUMBNAIL_FILE);

        let mut attempts = 0u32;
        let bytes = retry_notify(
            self.build_backoff(),
            || {
                attempts += 1;
                self.fetch_once(url, &path, attempts)
            },
            |err: NumbersC2paError, duration: Duration| {
                warn!(
                    error = %err,
                    retry_after_ms = duration.as_millis() as u64,
                    "Thumbnail retry scheduled"
                );
            },
        )
        .map_err(|e| match e {
            backoff::Error::Permanent(err) => err,
            backoff::Error::Transient { err, .. } => err,
        })?;

        debug!(path = %path.display(), bytes, "Staged thumbnail");

        Ok(Thumbnail {
            format: THUMBNAIL_FORMAT.to_string(),
            identifier: path.to_string_lossy().into_owned(),
        })
    }

    fn fetch_once(
        &self,
        url: &str,
        path: &Path,
        attempt: u32,
    ) -> std::result::Result<u64, backoff::Error<NumbersC2paError>> {
        let start = Instant::now();
        // Transient failures stop being retried once the budget is spent.
        let give_up = attempt > self.retries;

        let mut response = self.client.get(url).send().map_err(|e| {
            let latency_ms = start.elapsed().as_millis() as u64;
            if is_transient_error(&e) && !give_up {
                warn!(error = %e, latency_ms, "Transient error, will retry");
                backoff::Error::transient(NumbersC2paError::Http(e))
            } else {
                warn!(error = %e, latency_ms, "Permanent error, aborting");
                backoff::Error::permanent(NumbersC2paError::Http(e))
            }
        })?;

        let status = response.status();
        debug!(status = %status, "Received thumbnail response");

        if !status.is_success() {
            let err = NumbersC2paError::ThumbnailFetch(format!("{url} returned status {status}"));
            return if is_transient_status(status) && !give_up {
                Err(backoff::Error::transient(err))
            } else {
                Err(backoff::Error::permanent(err))
            };
        }

        let mut file = File::create(path)
            .map_err(|e| backoff::Error::permanent(NumbersC2paError::Io(e)))?;
        response
            .copy_to(&mut file)
            .map_err(|e| backoff::Error::permanent(NumbersC2paError::Http(e)))
    }

    fn build_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: INITIAL_RETRY_INTERVAL,
            max_interval: MAX_RETRY_INTERVAL,
            max_elapsed_time: self.timeout.checked_mul(self.retries.saturating_add(1)),
            ..Default::default()
        }
    }
}

/// Check if a reqwest error is transient and should be retried.
pub fn is_transient_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}

/// Check if an HTTP status code indicates a transient error.
pub fn is_transient_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
            | StatusCode::BAD_GATEWAY
    )
}
