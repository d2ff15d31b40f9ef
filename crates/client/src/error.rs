use thiserror::Error;

use shopfront_session::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy of the HTTP layer.
///
/// The split the UI depends on: [`ApiError::InvalidCredentials`] ("wrong
/// password") vs [`ApiError::Network`] ("server unreachable") vs
/// [`ApiError::SessionExpired`] ("log in again"). None of these are retried
/// automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login/registration rejected by the backend. Nothing was stored.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A 401 on an authenticated endpoint; the stored token has been purged
    /// and the consumer should navigate to the login view.
    #[error("session is no longer valid")]
    SessionExpired,

    /// Authenticated but not allowed (403). The session is left intact; the
    /// consumer should navigate to the forbidden view, not the login view.
    #[error("access denied")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    /// 400/422 validation failure, with the backend's message.
    #[error("validation failed: {0}")]
    Validation(String),

    /// 409, e.g. registering an email that already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// No usable response: connect failure, timeout, protocol error.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Persisting the freshly issued token failed.
    #[error("token storage failed: {0}")]
    Store(#[from] StoreError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}
