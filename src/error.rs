use std::fmt;

#[derive(Debug)]
pub enum LogoError {
    InvalidInput(String),
    AuthError(String),
    RateLimited(String),
    ServiceError(String),
    NetworkError(String),
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LogoError::AuthError(msg) => write!(f, "Authentication error: {}", msg),
            LogoError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            LogoError::ServiceError(msg) => write!(f, "Service error: {}", msg),
            LogoError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for LogoError {}

pub type Result<T> = std::result::Result<T, LogoError>;
