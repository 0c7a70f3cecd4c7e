use thiserror::Error;

/// Shown to the user for every prediction failure. The detailed variant is
/// only logged.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not reach the classification service. Is it running?";

/// Errors that can occur while asking the service for a prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("service responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("refusing to submit an empty image")]
    EmptyImage,

    #[error("failed to encode drawing: {0}")]
    Encoding(String),
}

impl PredictionError {
    /// The message the result panel displays.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }
}

impl From<reqwest::Error> for PredictionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<EncodeError> for PredictionError {
    fn from(err: EncodeError) -> Self {
        Self::Encoding(err.to_string())
    }
}

/// Errors from turning the pixel buffer into a transport string and back
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("png encoding failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("not a png data url")]
    NotADataUrl,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors that can occur while reading the service configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid service url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid request timeout {0:?}, expected whole seconds")]
    InvalidTimeout(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Rejected state machine transition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    #[error("cannot transition from {from} to {to}")]
    InvalidStateTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("a prediction is already in flight")]
    Busy,
}
