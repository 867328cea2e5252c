//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable exit code.

use miette::Diagnostic;
use thiserror::Error;

use catchnet_config::ConfigError;
use catchnet_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the API at {url}")]
    #[diagnostic(
        code(catchnet::connection_failed),
        help(
            "Check that the API server is running and reachable.\n\
             URL: {url}\n\
             Override it with --api-url or CATCHNET_API_URL."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: catchnet_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(catchnet::timeout),
        help("Increase the limit with --timeout, or pass --timeout 0 to wait indefinitely.")
    )]
    Timeout {
        #[source]
        source: catchnet_api::Error,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API request failed with HTTP {status}")]
    #[diagnostic(code(catchnet::request_failed), help("Requested: {url}"))]
    RequestFailed { status: u16, url: String },

    #[error("API error: {0}")]
    #[diagnostic(code(catchnet::api_error))]
    Api(catchnet_api::Error),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(catchnet::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(catchnet::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: catchnet config init --profile {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(catchnet::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::RequestFailed { status: 404, .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Upstream error mapping ───────────────────────────────────────────

impl From<catchnet_api::Error> for CliError {
    fn from(err: catchnet_api::Error) -> Self {
        match err {
            catchnet_api::Error::RequestFailed { status, url } => {
                CliError::RequestFailed { status, url }
            }
            catchnet_api::Error::Transport(ref e) if e.is_timeout() => {
                CliError::Timeout { source: err }
            }
            catchnet_api::Error::Transport(ref e) if err.is_connect() => {
                let url = e.url().map(ToString::to_string).unwrap_or_default();
                CliError::ConnectionFailed { url, source: err }
            }
            other => CliError::Api(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(e) => e.into(),
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_keeps_status_and_exit_code() {
        let err: CliError = catchnet_api::Error::RequestFailed {
            status: 404,
            url: "http://127.0.0.1:8000/api/ports".into(),
        }
        .into();

        assert!(matches!(err, CliError::RequestFailed { status: 404, .. }));
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err: CliError = ConfigError::Validation {
            field: "api_url".into(),
            reason: "bad".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn core_config_error_is_general() {
        let err: CliError = CoreError::Config {
            message: "unsupported URL scheme".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }
}
