//! Custom error types for figure extraction

use std::fmt;
use std::io;

/// Errors raised while detecting, cropping or writing figure regions
#[derive(Debug)]
pub enum FigureError {
    /// Required configuration (such as the API credential) is missing or invalid
    Configuration(String),
    /// The vision service answered with a failure or could not be reached
    RemoteService(String),
    /// The vision service answered with content we cannot interpret
    MalformedResponse(String),
    /// Source image could not be read or decoded
    ImageRead(String),
    /// Base64 payload could not be decoded into an image
    ImageDecode(String),
    /// A crop could not be encoded or written
    ImageWrite(String),
    /// The document-layout model failed to load or run
    Model(String),
    /// I/O error
    Io(io::Error),
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            FigureError::RemoteService(msg) => write!(f, "Vision API error: {}", msg),
            FigureError::MalformedResponse(msg) => write!(f, "Malformed vision API response: {}", msg),
            FigureError::ImageRead(msg) => write!(f, "{}", msg),
            FigureError::ImageDecode(msg) => write!(f, "{}", msg),
            FigureError::ImageWrite(msg) => write!(f, "Failed to write figure: {}", msg),
            FigureError::Model(msg) => write!(f, "Layout model error: {}", msg),
            FigureError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FigureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FigureError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FigureError {
    fn from(error: io::Error) -> Self {
        FigureError::Io(error)
    }
}

impl From<reqwest::Error> for FigureError {
    fn from(error: reqwest::Error) -> Self {
        FigureError::RemoteService(error.to_string())
    }
}

impl From<serde_json::Error> for FigureError {
    fn from(error: serde_json::Error) -> Self {
        FigureError::MalformedResponse(error.to_string())
    }
}

impl From<base64::DecodeError> for FigureError {
    fn from(error: base64::DecodeError) -> Self {
        FigureError::ImageDecode(format!("Could not decode base64 image: {}", error))
    }
}

#[cfg(feature = "layout-model")]
impl From<ort::Error> for FigureError {
    fn from(error: ort::Error) -> Self {
        FigureError::Model(error.to_string())
    }
}

/// Result type for figure extraction operations
pub type FigureResult<T> = Result<T, FigureError>;
