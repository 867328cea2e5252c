//! Reactive filter state between `catchnet-api` and dashboard views.
//!
//! - **[`FilterCoordinator`]**: cloneable handle that owns the API client
//!   and the filter state. [`initialize_filters()`](FilterCoordinator::initialize_filters)
//!   fetches ports, dates and vessels concurrently and publishes the lists
//!   together with their default selections in a single step.
//!
//! - **[`FilterStore`]**: option lists plus the current [`Selection`],
//!   published through one `tokio::sync::watch` channel so observers only
//!   ever see whole snapshots.
//!
//! - **[`FilterStream`]**: subscription handle vended by the store, with
//!   `current()` / `latest()` / `changed()` for reactive consumers.
//!
//! Selections are plain shared state. Any consumer may overwrite them and
//! they are not re-checked against the option lists.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ClientConfig, TlsVerification};
pub use coordinator::{FilterCoordinator, LoadState};
pub use error::CoreError;
pub use model::{
    DailyExports, DailyView, FilterField, FilterOptions, FilterSnapshot, IsoDate, Port, Selection,
    Vessel,
};
pub use store::FilterStore;
pub use stream::FilterStream;
