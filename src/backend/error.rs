use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got an HTTP status back.
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Server error (status {0})")]
    Server(u16),
    #[error("Request failed with status {status}")]
    Http { status: u16, message: Option<String> },
    /// A 2xx answer whose envelope says `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("The request was not successful."))]
    Business(Option<String>),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status the way the backend contract counts it; 0 for transport failures.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Network(_) => 0,
            ApiError::Unauthorized => 401,
            ApiError::Server(status) => *status,
            ApiError::Http { status, .. } => *status,
            ApiError::Business(_) | ApiError::Decode(_) => 200,
        }
    }

    /// Errors the interceptor already turned into a notification.
    pub fn is_reported_centrally(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Unauthorized | ApiError::Server(_)
        )
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Business(message) => message.as_deref(),
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => ApiError::Http {
                status: status.as_u16(),
                message: None,
            },
            None => ApiError::Network(err.to_string()),
        }
    }
}
