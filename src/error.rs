// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants carry `String` payloads instead of the source error types so the
/// whole enum stays `Clone` and can travel inside Iced messages.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connection refused, TLS, timeout).
    Http(String),
    /// The backend answered with a non-success status.
    Api { status: u16, message: String },
    /// Response body could not be decoded.
    Decode(String),
    /// Configuration file could not be read or written.
    Config(String),
}

impl Error {
    /// Best-effort, user-displayable message for toast notifications.
    pub fn user_message(&self) -> String {
        match self {
            Error::Http(_) => "Could not reach the prooforia server".to_string(),
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            Error::Api { status, .. } => format!("Request failed (HTTP {status})"),
            Error::Decode(_) => "Received an unexpected response from the server".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api { status, message } => write!(f, "API Error ({}): {}", status, message),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_api_error_with_status() {
        let err = Error::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(format!("{}", err), "API Error (404): not found");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn user_message_prefers_api_body() {
        let err = Error::Api {
            status: 400,
            message: "Invalid private key".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid private key");
    }

    #[test]
    fn user_message_falls_back_to_status() {
        let err = Error::Api {
            status: 500,
            message: String::new(),
        };
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn user_message_hides_transport_details() {
        let err = Error::Http("dns error: no record".to_string());
        assert!(!err.user_message().contains("dns"));
    }
}
