// Wire-level value types for the CatchNet API.
//
// Ports, dates and vessels travel as bare JSON strings. They are wrapped
// in newtypes so a port can never be passed where a date is expected.
// Detail payloads stay opaque JSON; the server owns their shape.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! string_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The empty value doubles as "nothing selected".
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_value!(
    /// Opaque identifier of a logistics port (e.g. `"Haacklee"`).
    Port
);

string_value!(
    /// Calendar date as an ISO-8601 `YYYY-MM-DD` string.
    ///
    /// Compared and transported as text; no timezone semantics.
    IsoDate
);

string_value!(
    /// Opaque identifier of a vessel.
    Vessel
);

impl IsoDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse into a calendar date, if the text is a valid `YYYY-MM-DD`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, Self::FORMAT).ok()
    }
}

impl From<NaiveDate> for IsoDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }
}

// ── Opaque detail payloads ──────────────────────────────────────────

/// Detail payload for one (port, date) pair from `/api/daily_view`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyView(serde_json::Value);

impl DailyView {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

/// Export tonnage payload for one (port, date) pair from `/api/daily_exports_view`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyExports(serde_json::Value);

impl DailyExports {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for DailyView {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<serde_json::Value> for DailyExports {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Body of `GET /`: a liveness banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_parses_calendar_date() {
        let date = IsoDate::from("2024-03-01");
        assert_eq!(
            date.to_naive_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn iso_date_rejects_other_formats() {
        assert!(IsoDate::from("01/03/2024").to_naive_date().is_none());
        assert!(IsoDate::default().to_naive_date().is_none());
    }

    #[test]
    fn iso_date_from_naive_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2035, 2, 7).unwrap();
        assert_eq!(IsoDate::from(date).as_str(), "2035-02-07");
    }

    #[test]
    fn values_are_transparent_strings() {
        let port: Port = serde_json::from_str("\"Port A\"").unwrap();
        assert_eq!(port.as_str(), "Port A");
        assert_eq!(serde_json::to_string(&Vessel::from("V1")).unwrap(), "\"V1\"");
    }

    #[test]
    fn default_value_is_empty() {
        assert!(Port::default().is_empty());
        assert!(!Port::from("P1").is_empty());
    }
}
