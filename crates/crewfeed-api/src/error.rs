use std::fmt;

/// Result type for crewfeed-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the remote data access layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS)
    Http(reqwest::Error),

    /// The server answered with a non-success status
    Status(u16),

    /// The response body did not match the expected payload shape
    Decode(String),

    /// The configured API base URL is unusable
    InvalidBase(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status(code) => write!(f, "HTTP error! Status: {}", code),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::InvalidBase(msg) => write!(f, "Invalid API base URL: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Status(_) | Error::Decode(_) | Error::InvalidBase(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err)
        }
    }
}
