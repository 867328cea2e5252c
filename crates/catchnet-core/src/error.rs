// ── Core error types ──
//
// API failures pass through unchanged: the coordinator never catches,
// retries, or rewrites them. Consumers decide what the user sees.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A request to the API failed (transport, status, or body decoding).
    #[error(transparent)]
    Api(#[from] catchnet_api::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}
