use thiserror::Error;

use crate::strings;

/// Errors from fetching the catalog.
///
/// Transport, status and decode failures stay distinct for diagnostics, but
/// all collapse into one fixed user-facing message at the UI boundary; the
/// raw cause only goes to the log.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, connect failure, transport-level timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The response body is not a catalog array.
    #[error("malformed catalog body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Fixed localized message shown on the error screen, regardless of the
    /// underlying cause.
    pub fn user_message(&self) -> &'static str {
        strings::FETCH_FAILED
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        self.to_string()
    }
}
