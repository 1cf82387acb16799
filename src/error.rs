// src/error.rs
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of the transport itself: the request never produced a usable
/// response (DNS, refused connection, interrupted body, undecodable JSON).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl FetchError {
    /// Wrap an underlying cause, carrying its description as the message.
    pub fn new(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Connectivity is known absent. The message collapses to "offline"
    /// instead of echoing the cause; the cause stays attached as source.
    pub fn offline(source: impl Into<BoxError>) -> Self {
        Self {
            message: "offline".to_string(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything an API call can fail with
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend was reachable but answered with a non-200 status.
    /// The body text is carried verbatim for display, not parsed.
    #[error("server responded with {status}: {body}")]
    Server { status: u16, body: String },

    /// The backend could not be reached, or its answer could not be decoded
    #[error("can not communicate with backend server: {0}")]
    Transport(#[from] FetchError),
}
