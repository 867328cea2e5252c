// ── Filter coordinator ──
//
// Owns the API client and the filter store. Initialization fetches the
// three option lists concurrently and publishes them, with their default
// selections, in one store write once all three have succeeded.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use catchnet_api::ApiClient;

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::{
    DailyExports, DailyView, FilterOptions, FilterSnapshot, IsoDate, Port, Selection, Vessel,
};
use crate::store::FilterStore;
use crate::stream::FilterStream;

// ── LoadState ────────────────────────────────────────────────────

/// Progress of the most recent initialization, observable by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

// ── FilterCoordinator ────────────────────────────────────────────

/// The entry point for dashboard views.
///
/// Cheaply cloneable via `Arc<CoordinatorInner>`; every clone shares the
/// same store. Build one per application (or per test) and pass it to
/// whatever needs the filters.
#[derive(Clone)]
pub struct FilterCoordinator {
    inner: Arc<CoordinatorInner>,
}

struct CoordinatorInner {
    client: ApiClient,
    store: Arc<FilterStore>,
    load_state: watch::Sender<LoadState>,
}

impl FilterCoordinator {
    /// Create a coordinator from configuration. Does NOT fetch anything;
    /// call [`initialize_filters()`](Self::initialize_filters) for that.
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let scheme = config.base_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(CoreError::Config {
                message: format!("unsupported URL scheme '{scheme}' in {}", config.base_url),
            });
        }

        let client = ApiClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self::with_client(client))
    }

    /// Create a coordinator around an existing API client.
    pub fn with_client(client: ApiClient) -> Self {
        let (load_state, _) = watch::channel(LoadState::Uninitialized);
        Self {
            inner: Arc::new(CoordinatorInner {
                client,
                store: Arc::new(FilterStore::new()),
                load_state,
            }),
        }
    }

    /// Access the API client for queries the coordinator does not wrap.
    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Access the underlying FilterStore.
    pub fn store(&self) -> &Arc<FilterStore> {
        &self.inner.store
    }

    // ── Initialization ───────────────────────────────────────────

    /// Fetch ports, dates and vessels, then publish them with defaults.
    ///
    /// The three requests run concurrently and the group fails as soon as
    /// any one of them fails; in that case nothing is written and the
    /// store keeps whatever it held before. On success the lists and the
    /// default selections (first entry, or empty) land in one write.
    ///
    /// Calling again re-fetches and overwrites. Overlapping calls are not
    /// serialized against each other; the last one to finish wins. The
    /// load state follows the same rule, so a slow failing call can leave
    /// it at `Failed` while the store holds a newer call's lists.
    pub async fn initialize_filters(&self) -> Result<(), CoreError> {
        self.inner.load_state.send_replace(LoadState::Loading);
        debug!(base_url = %self.inner.client.base_url(), "loading filter options");

        let client = &self.inner.client;
        let fetched = tokio::try_join!(
            client.fetch_ports(),
            client.fetch_dates(),
            client.fetch_vessels(),
        );

        let (ports, dates, vessels) = match fetched {
            Ok(lists) => lists,
            Err(e) => {
                warn!(error = %e, "filter initialization failed");
                self.inner.load_state.send_replace(LoadState::Failed);
                return Err(e.into());
            }
        };

        let selection = self.inner.store.apply_options(FilterOptions {
            ports,
            dates,
            vessels,
        });
        self.inner.load_state.send_replace(LoadState::Ready);

        let options = self.inner.store.options();
        info!(
            ports = options.ports.len(),
            dates = options.dates.len(),
            vessels = options.vessels.len(),
            port = %selection.port,
            date = %selection.date,
            vessel = %selection.vessel,
            "filters initialized"
        );

        Ok(())
    }

    // ── State observation ────────────────────────────────────────

    pub fn load_state(&self) -> LoadState {
        *self.inner.load_state.borrow()
    }

    /// Subscribe to load state changes.
    pub fn subscribe_load_state(&self) -> watch::Receiver<LoadState> {
        self.inner.load_state.subscribe()
    }

    /// Subscribe to filter changes.
    pub fn subscribe(&self) -> FilterStream {
        self.inner.store.subscribe()
    }

    // ── Snapshot accessors (delegate to FilterStore) ─────────────

    pub fn snapshot(&self) -> FilterSnapshot {
        self.inner.store.snapshot()
    }

    pub fn options(&self) -> Arc<FilterOptions> {
        self.inner.store.options()
    }

    pub fn selection(&self) -> Selection {
        self.inner.store.selection()
    }

    // ── Selection writes (delegate to FilterStore) ───────────────

    pub fn set_port(&self, port: Port) {
        self.inner.store.set_port(port);
    }

    pub fn set_date(&self, date: IsoDate) {
        self.inner.store.set_date(date);
    }

    pub fn set_vessel(&self, vessel: Vessel) {
        self.inner.store.set_vessel(vessel);
    }

    pub fn select(&self, selection: Selection) {
        self.inner.store.select(selection);
    }

    // ── Queries scoped to the current selection ──────────────────

    /// Daily view for the selected port and date.
    ///
    /// `Ok(None)` when either is unset: the "no data" state.
    pub async fn daily_view_for_selection(&self) -> Result<Option<DailyView>, CoreError> {
        let selection = self.selection();
        let Some((port, date)) = selection.scope() else {
            debug!("no port/date selected, skipping daily view");
            return Ok(None);
        };
        Ok(Some(self.inner.client.fetch_daily_view(port, date).await?))
    }

    /// Daily exports for the selected port and date.
    ///
    /// `Ok(None)` when either is unset.
    pub async fn daily_exports_for_selection(&self) -> Result<Option<DailyExports>, CoreError> {
        let selection = self.selection();
        let Some((port, date)) = selection.scope() else {
            debug!("no port/date selected, skipping daily exports");
            return Ok(None);
        };
        Ok(Some(
            self.inner.client.fetch_daily_exports(port, date).await?,
        ))
    }
}
