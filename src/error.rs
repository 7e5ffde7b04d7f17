//! Error type shared by the data types and the gateway client.

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body could not be decoded into the expected type.
    ///
    /// `status` is the HTTP status of the response, kept for diagnosis only;
    /// the client never rejects a response because of its status.
    #[error("failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// A caller-supplied path parameter would be dropped or collapsed by URL
    /// normalization (`""`, `"."` or `".."`).
    #[error("invalid path parameter {segment:?}")]
    InvalidPathSegment { segment: String },
    #[error("request cancelled")]
    Cancelled,
    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl Error {
    /// Returns `true` for connection, DNS and other transport-level failures.
    pub fn is_transport(&self) -> bool {
        #[cfg(feature = "client")]
        if let Self::Http(_) = self {
            return true;
        }
        false
    }

    /// Returns `true` if a response or an encoded value could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Base64(_))
    }

    /// Returns `true` if the call was abandoned because its context was
    /// cancelled or ran out of time.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
