// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Transport(TransportError),
}

/// Local form validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The email field is empty.
    MissingEmail,
    /// No image has been selected.
    MissingImages,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingEmail => "status-missing-email",
            ValidationError::MissingImages => "status-missing-images",
        }
    }
}

/// Failures of the upload request.
/// Used to provide user-friendly, localized detail under the failure status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The HTTP client could not be built (TLS backend, invalid settings).
    Client(String),

    /// A selected file could not be turned into a multipart part.
    InvalidPart(String),

    /// Connection refused, DNS failure, reset, etc.
    Network(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The endpoint answered with a non-2xx status code.
    Status(u16),
}

impl TransportError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TransportError::Client(_) => "upload-error-client",
            TransportError::InvalidPart(_) => "upload-error-invalid-part",
            TransportError::Network(_) => "upload-error-network",
            TransportError::Timeout => "upload-error-timeout",
            TransportError::Status(_) => "upload-error-status",
        }
    }

    /// Arguments interpolated into the localized detail message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            TransportError::InvalidPart(name) => vec![("name", name.clone())],
            TransportError::Status(code) => vec![("status", code.to_string())],
            TransportError::Client(_) | TransportError::Network(_) | TransportError::Timeout => {
                Vec::new()
            }
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Client(msg) => write!(f, "HTTP client error: {}", msg),
            TransportError::InvalidPart(name) => write!(f, "Invalid multipart part: {}", name),
            TransportError::Network(msg) => write!(f, "Network error: {}", msg),
            TransportError::Timeout => write!(f, "Request timed out"),
            TransportError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::Client(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Transport(e) => write!(f, "Transport Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
