use thiserror::Error;

/// Top-level error type for the `catchnet-api` crate.
///
/// Transport failures are carried unchanged; any non-success HTTP status
/// collapses into a single generic [`Error::RequestFailed`].
/// `catchnet-core` wraps these without rewriting them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request ─────────────────────────────────────────────────────
    /// The server answered with a non-success status. The body is not read.
    #[error("API request failed (HTTP {status}) for {url}")]
    RequestFailed { status: u16, url: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The body was not valid JSON, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server could not be reached at all.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_is_not_a_connect_error() {
        let err = Error::RequestFailed {
            status: 503,
            url: "http://127.0.0.1:8000/api/ports".into(),
        };
        assert!(!err.is_connect());
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn deserialization_is_not_a_connect_error() {
        let err = Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        };
        assert!(!err.is_connect());
    }
}
