use std::error::Error;
use std::fmt;

/// Error enum for the vRA API
#[derive(Debug, Clone, PartialEq)]
pub enum VraAPIError {
    /// No usable token, or the platform rejected the credentials; carries the reason or the response body
    InvalidCredentials(String),
    /// Invalid parameters
    InvalidParams(String),
    /// API error - the platform answered with a non-success status
    APIError {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the platform
        body: String,
    },
    /// Request never produced a response
    Transport(String),
    /// Response body could not be decoded
    Decode(String),
    /// Invalid provider configuration
    Config(String),
}

impl fmt::Display for VraAPIError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VraAPIError::InvalidCredentials(e) => {
                write!(f, "Invalid Credentials: {}", e)
            }
            VraAPIError::InvalidParams(e) => {
                write!(f, "Invalid Input Parameters: {}", e)
            }
            VraAPIError::APIError { status, body } => {
                write!(f, "API Error ({}): {}", status, body)
            }
            VraAPIError::Transport(e) => {
                write!(f, "Transport Error: {}", e)
            }
            VraAPIError::Decode(e) => {
                write!(f, "Decode Error: {}", e)
            }
            VraAPIError::Config(e) => {
                write!(f, "Configuration Error: {}", e)
            }
        }
    }
}

impl Error for VraAPIError {}

impl From<reqwest::Error> for VraAPIError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            VraAPIError::Decode(e.to_string())
        } else {
            VraAPIError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for VraAPIError {
    fn from(e: serde_json::Error) -> Self {
        VraAPIError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for VraAPIError {
    fn from(e: url::ParseError) -> Self {
        VraAPIError::Config(e.to_string())
    }
}
