//! TfNSW client error types.

use std::fmt;

/// Errors from the TfNSW HTTP client.
#[derive(Debug)]
pub enum TfnswError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for TfnswError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfnswError::Http(e) => write!(f, "HTTP error: {e}"),
            TfnswError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TfnswError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TfnswError::RateLimited => write!(f, "rate limited by TfNSW API"),
            TfnswError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for TfnswError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfnswError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfnswError {
    fn from(err: reqwest::Error) -> Self {
        TfnswError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TfnswError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (invalid API key)");

        let err = TfnswError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = TfnswError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }
}
