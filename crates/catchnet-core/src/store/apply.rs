// ── Store writes ──
//
// Loading new option lists resets the selection to its defaults in the
// same write. Selection setters take any value; nothing checks it
// against the option lists.

use std::sync::Arc;

use super::FilterStore;
use crate::model::{FilterOptions, IsoDate, Port, Selection, Vessel};

impl FilterStore {
    /// Replace all three option lists and reset the selection to the first
    /// entry of each. Returns the new selection.
    pub(crate) fn apply_options(&self, options: FilterOptions) -> Selection {
        let selection = options.default_selection();
        let published = selection.clone();
        let options = Arc::new(options);
        self.write(move |snap| {
            snap.options = options;
            snap.selection = published;
        });
        selection
    }

    pub fn set_port(&self, port: Port) {
        self.write(|snap| snap.selection.port = port);
    }

    pub fn set_date(&self, date: IsoDate) {
        self.write(|snap| snap.selection.date = date);
    }

    pub fn set_vessel(&self, vessel: Vessel) {
        self.write(|snap| snap.selection.vessel = vessel);
    }

    /// Overwrite all three selections at once.
    pub fn select(&self, selection: Selection) {
        self.write(|snap| snap.selection = selection);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FilterSnapshot;

    fn options() -> FilterOptions {
        FilterOptions {
            ports: vec!["P1".into(), "P2".into()],
            dates: vec!["2024-01-01".into()],
            vessels: vec![],
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = FilterStore::new();
        assert_eq!(store.snapshot(), FilterSnapshot::default());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn apply_options_sets_lists_and_defaults_in_one_write() {
        let store = FilterStore::new();
        let selection = store.apply_options(options());

        assert_eq!(store.version(), 1);
        assert_eq!(*store.options(), options());
        assert_eq!(store.selection(), selection);
        assert_eq!(selection.port.as_str(), "P1");
        assert!(selection.vessel.is_empty());
    }

    #[test]
    fn setters_do_not_validate() {
        let store = FilterStore::new();
        store.apply_options(options());

        store.set_port("Nowhere".into());
        store.set_vessel("Ghost".into());

        let snap = store.snapshot();
        assert_eq!(snap.selection.port.as_str(), "Nowhere");
        assert_eq!(snap.selection.vessel.as_str(), "Ghost");
        assert_eq!(snap.version, 3);
        assert_eq!(*snap.options, options());
    }

    #[test]
    fn select_replaces_whole_selection() {
        let store = FilterStore::new();
        store.apply_options(options());
        store.select(Selection {
            port: "P2".into(),
            date: "2024-01-01".into(),
            vessel: Vessel::default(),
        });
        assert_eq!(store.selection().port.as_str(), "P2");
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn set_date_keeps_other_fields() {
        let store = FilterStore::new();
        store.apply_options(options());
        store.set_date(IsoDate::from("2030-12-31"));
        let sel = store.selection();
        assert_eq!(sel.port.as_str(), "P1");
        assert_eq!(sel.date.as_str(), "2030-12-31");
    }

    #[tokio::test]
    async fn subscriber_sees_one_change_per_load() {
        let store = FilterStore::new();
        let mut stream = store.subscribe();

        store.apply_options(options());

        let snap = stream.changed().await.expect("store alive");
        assert_eq!(snap.version, 1);
        assert_eq!(snap.options.ports.len(), 2);
        assert_eq!(snap.selection.port.as_str(), "P1");
        assert!(!stream.has_changed());
    }
}
