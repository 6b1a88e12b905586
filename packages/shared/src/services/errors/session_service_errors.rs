use std::fmt;

#[derive(Debug)]
pub enum SessionServiceError {
    JwtError(String),
    InvalidToken,
    ExpiredToken,
}

impl fmt::Display for SessionServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionServiceError::JwtError(msg) => write!(f, "JWT error: {}", msg),
            SessionServiceError::InvalidToken => write!(f, "Invalid session token"),
            SessionServiceError::ExpiredToken => write!(f, "Session token has expired"),
        }
    }
}

impl std::error::Error for SessionServiceError {}
