// catchnet-api: Async Rust client for the CatchNet port operations API

pub mod client;
pub mod error;
pub mod filters;
pub mod models;
pub mod transport;
pub mod views;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use models::{ApiStatus, DailyExports, DailyView, IsoDate, Port, Vessel};
pub use transport::{TlsMode, TransportConfig};
