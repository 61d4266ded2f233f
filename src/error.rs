//! Error types for Mail Composer
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Text shown when a send fails without a server-provided reason
pub const GENERIC_SEND_FAILURE: &str = "Failed to send email. Please try again.";

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, log directory, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// The request never produced a usable response (DNS, refused, reset)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The endpoint answered with a non-success status
    #[snafu(display("Endpoint rejected the request ({status}): {}", message.as_deref().unwrap_or("no reason given")))]
    Rejected { status: u16, message: Option<String> },

    /// The endpoint answered with a body that is not JSON
    #[snafu(display("Malformed response ({status}): {source}"))]
    MalformedResponse {
        status: u16,
        source: serde_json::Error,
    },
}

impl Error {
    /// Server-provided reason for a rejected send, if it gave a usable one
    pub fn server_reason(&self) -> Option<&str> {
        match self {
            Error::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text to surface to the user for a failed send.
    ///
    /// Only a server-provided `error` string is passed through; everything
    /// else collapses to [`GENERIC_SEND_FAILURE`].
    pub fn user_message(&self) -> String {
        self.server_reason()
            .unwrap_or(GENERIC_SEND_FAILURE)
            .to_string()
    }

    /// HTTP status carried by the error, if the endpoint answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Rejected { status, .. } | Error::MalformedResponse { status, .. } => {
                Some(*status)
            }
            Error::Http { source } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_reason_passes_message_through() {
        let err = Error::Rejected {
            status: 429,
            message: Some("quota exceeded".to_string()),
        };
        assert_eq!(err.user_message(), "quota exceeded");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_rejected_without_reason_uses_generic_text() {
        let err = Error::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), GENERIC_SEND_FAILURE);

        let blank = Error::Rejected {
            status: 500,
            message: Some("   ".to_string()),
        };
        assert_eq!(blank.user_message(), GENERIC_SEND_FAILURE);
    }

    #[test]
    fn test_malformed_response_uses_generic_text() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = Error::MalformedResponse {
            status: 200,
            source,
        };
        assert_eq!(err.user_message(), GENERIC_SEND_FAILURE);
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_invalid_has_no_status() {
        let err = Error::Invalid {
            message: "bad endpoint".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Invalid: bad endpoint");
    }
}
