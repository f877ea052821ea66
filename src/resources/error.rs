//! Failure classification for the resources fetch.

use thiserror::Error;

/// Message shown to the user for every fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch coding resources";

/// Errors that can occur while loading the resources listing.
///
/// The variants only matter for diagnostics; the UI collapses all of them
/// into [`FETCH_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read.
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("'{endpoint}' returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// Body was not a JSON array of resources.
    #[error("Malformed response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// User-facing message for display.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Technical details for the log.
    pub fn details(&self) -> String {
        self.to_string()
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> FetchError {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        FetchError::Decode {
            endpoint: "http://x".to_string(),
            source,
        }
    }

    #[test]
    fn every_variant_shares_the_user_message() {
        let status = FetchError::Status {
            endpoint: "http://x".to_string(),
            status: 503,
        };
        assert_eq!(status.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(decode_error().user_message(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn details_carry_the_cause() {
        let status = FetchError::Status {
            endpoint: "http://x".to_string(),
            status: 404,
        };
        assert_eq!(status.details(), "'http://x' returned status 404");
        assert_eq!(status.kind(), "status");
        assert!(decode_error().details().starts_with("Malformed response from 'http://x'"));
        assert_eq!(decode_error().kind(), "decode");
    }
}
