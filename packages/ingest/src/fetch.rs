//! HTTP fetch with retry for published sheet exports.
//!
//! Transient failures (connection errors, timeouts, HTTP 429 and 5xx) are
//! retried with exponential backoff; other error statuses fail immediately.
//! A batch that still fails after all retries surfaces a single
//! [`IngestError`]; callers keep whatever data they already had.

use std::time::Duration;

use crate::IngestError;

/// Retry attempts for transient HTTP errors.
const MAX_RETRIES: u32 = 3;

/// First backoff delay; doubles per attempt (2s, 4s, 8s).
const INITIAL_BACKOFF: Duration = Duration::from_secs(2);

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches a URL as text, retrying transient failures.
///
/// # Errors
///
/// Returns [`IngestError::Http`] when the request still fails after all
/// retries, or [`IngestError::Status`] for a non-retryable error status.
#[allow(clippy::future_not_send)]
pub async fn fetch_text(url: &str) -> Result<String, IngestError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let mut backoff = INITIAL_BACKOFF;
    let mut last_status = 503;

    for attempt in 0..=MAX_RETRIES {
        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(response.text().await?);
                }
                if !is_retryable_status(status.as_u16()) {
                    return Err(IngestError::Status {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                last_status = status.as_u16();
                log::warn!(
                    "HTTP {status} fetching {url} (attempt {}/{})",
                    attempt + 1,
                    MAX_RETRIES + 1
                );
            }
            Err(error) => {
                if attempt == MAX_RETRIES {
                    return Err(IngestError::Http(error));
                }
                log::warn!(
                    "Request error fetching {url} (attempt {}/{}): {error}",
                    attempt + 1,
                    MAX_RETRIES + 1
                );
            }
        }

        if attempt < MAX_RETRIES {
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

    Err(IngestError::Status {
        status: last_status,
        url: url.to_string(),
    })
}

/// Whether an error status is worth retrying: 429 and all 5xx.
const fn is_retryable_status(status: u16) -> bool {
    status == 429 || status >= 500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_statuses() {
        assert!(is_retryable_status(429));
        assert!(is_retryable_status(500));
        assert!(is_retryable_status(503));
        assert!(!is_retryable_status(404));
        assert!(!is_retryable_status(401));
    }
}
