// ── Filter domain model ──
//
// Option lists, the current selection, and the snapshot that bundles
// them for observers. All value-shaped: equality is content equality.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use catchnet_api::{DailyExports, DailyView, IsoDate, Port, Vessel};

/// Which of the three filters a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Port,
    Date,
    Vessel,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Port => "port",
            Self::Date => "date",
            Self::Vessel => "vessel",
        })
    }
}

/// Everything the server advertises as selectable, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub ports: Vec<Port>,
    pub dates: Vec<IsoDate>,
    pub vessels: Vec<Vessel>,
}

impl FilterOptions {
    /// The selection a fresh load starts from: the first entry of each
    /// list, or the empty value when a list is empty.
    pub fn default_selection(&self) -> Selection {
        Selection {
            port: self.ports.first().cloned().unwrap_or_default(),
            date: self.dates.first().cloned().unwrap_or_default(),
            vessel: self.vessels.first().cloned().unwrap_or_default(),
        }
    }
}

/// The user's active (port, date, vessel) choice.
///
/// Empty strings mean "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub port: Port,
    pub date: IsoDate,
    pub vessel: Vessel,
}

impl Selection {
    /// The (port, date) pair detail queries are keyed on, if both are set.
    pub fn scope(&self) -> Option<(&Port, &IsoDate)> {
        if self.port.is_empty() || self.date.is_empty() {
            None
        } else {
            Some((&self.port, &self.date))
        }
    }
}

/// One published state of the filter store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSnapshot {
    pub options: Arc<FilterOptions>,
    pub selection: Selection,
    /// Bumped by one on every write to the store.
    pub version: u64,
}

impl FilterSnapshot {
    /// Fields whose selected value is not among the advertised options.
    ///
    /// An empty selection next to an empty list counts as consistent.
    /// This is a query only; nothing in the store acts on it.
    pub fn stale_fields(&self) -> Vec<FilterField> {
        fn stale<T: PartialEq>(value: &T, empty: bool, options: &[T]) -> bool {
            !(empty && options.is_empty()) && !options.contains(value)
        }

        let sel = &self.selection;
        let opts = &self.options;
        let mut fields = Vec::new();
        if stale(&sel.port, sel.port.is_empty(), &opts.ports) {
            fields.push(FilterField::Port);
        }
        if stale(&sel.date, sel.date.is_empty(), &opts.dates) {
            fields.push(FilterField::Date);
        }
        if stale(&sel.vessel, sel.vessel.is_empty(), &opts.vessels) {
            fields.push(FilterField::Vessel);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> FilterOptions {
        FilterOptions {
            ports: vec!["P1".into(), "P2".into()],
            dates: vec!["2024-01-01".into(), "2024-01-02".into()],
            vessels: vec!["V1".into()],
        }
    }

    #[test]
    fn default_selection_takes_first_entries() {
        let sel = options().default_selection();
        assert_eq!(sel.port.as_str(), "P1");
        assert_eq!(sel.date.as_str(), "2024-01-01");
        assert_eq!(sel.vessel.as_str(), "V1");
    }

    #[test]
    fn default_selection_of_empty_lists_is_empty() {
        assert_eq!(FilterOptions::default().default_selection(), Selection::default());
    }

    #[test]
    fn scope_needs_port_and_date() {
        let mut sel = options().default_selection();
        assert!(sel.scope().is_some());
        sel.date = IsoDate::default();
        assert!(sel.scope().is_none());
    }

    #[test]
    fn stale_fields_reports_values_outside_options() {
        let opts = options();
        let snap = FilterSnapshot {
            selection: Selection {
                port: "P9".into(),
                ..opts.default_selection()
            },
            options: Arc::new(opts),
            version: 2,
        };
        assert_eq!(snap.stale_fields(), vec![FilterField::Port]);
    }

    #[test]
    fn empty_store_is_consistent() {
        assert!(FilterSnapshot::default().stale_fields().is_empty());
    }
}
