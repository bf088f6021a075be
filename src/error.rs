use std::fmt;

#[derive(Debug)]
pub enum ShopError {
    /// Non-2xx response carrying the server's error message.
    ApiError {
        status: u16,
        message: String,
    },
    /// The server rejected a sign-in attempt.
    InvalidCredentials,
    /// A previously valid token is no longer accepted by the server.
    SessionExpired,
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::ApiError { message, .. } => write!(f, "{}", message),
            ShopError::InvalidCredentials => write!(f, "Invalid username or password"),
            ShopError::SessionExpired => {
                write!(f, "Session expired. Please sign in again.")
            }
            ShopError::NetworkError(_) => {
                write!(f, "Network error. Check your internet connection.")
            }
            ShopError::IoError(e) => write!(f, "IO error: {}", e),
            ShopError::JsonError(e) => write!(f, "JSON error: {}", e),
            ShopError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ShopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShopError::NetworkError(e) => Some(e),
            ShopError::IoError(e) => Some(e),
            ShopError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ShopError {
    fn from(err: reqwest::Error) -> Self {
        ShopError::NetworkError(err)
    }
}

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        ShopError::IoError(err)
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::JsonError(err)
    }
}

impl From<anyhow::Error> for ShopError {
    fn from(err: anyhow::Error) -> Self {
        ShopError::Other(err.to_string())
    }
}

impl From<String> for ShopError {
    fn from(msg: String) -> Self {
        ShopError::Other(msg)
    }
}

impl From<&str> for ShopError {
    fn from(msg: &str) -> Self {
        ShopError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
