/// Failures of a trivia API call. None of them are fatal: the caller shows the
/// message and keeps whatever screen was up before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response format: {0}")]
    Format(String),
    #[error("no questions available")]
    NoContent,
    #[error("no questions match the selected filters")]
    NoResults,
    #[error("invalid request parameters")]
    InvalidParameter,
    #[error("trivia session token error")]
    Session,
    #[error("rate limited by the trivia service")]
    RateLimited,
}

impl ApiError {
    /// Map a non-success `response_code` from `api.php`.
    pub fn from_response_code(code: i64) -> Self {
        match code {
            1 => ApiError::NoResults,
            2 => ApiError::InvalidParameter,
            3 | 4 => ApiError::Session,
            5 => ApiError::RateLimited,
            _ => ApiError::NoContent,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Format(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
