// Option-list endpoints: ports, dates, vessels.
//
// Each list arrives wrapped under a named key (`{"ports": [...]}`).
// A missing or malformed key decodes to an empty list, never an error.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{IsoDate, Port, Vessel};

/// Pull the list stored under `field` out of a response body.
///
/// Accepts the wrapped form `{ field: [...] }` and a bare array. Anything
/// else (missing key, `null`, wrong element type) yields an empty list.
pub(crate) fn unwrap_list<T: DeserializeOwned>(body: &Value, field: &str) -> Vec<T> {
    let raw = match body {
        Value::Array(_) => body,
        Value::Object(map) => {
            if let Some(raw) = map.get(field) {
                raw
            } else {
                warn!(field, "response has no list field, using empty list");
                return Vec::new();
            }
        }
        _ => {
            warn!(field, "response is neither an object nor a list, using empty list");
            return Vec::new();
        }
    };

    Vec::<T>::deserialize(raw).unwrap_or_else(|e| {
        warn!(field, error = %e, "malformed list field, using empty list");
        Vec::new()
    })
}

impl ApiClient {
    /// List every port the server knows about.
    ///
    /// `GET /api/ports`
    pub async fn fetch_ports(&self) -> Result<Vec<Port>, Error> {
        let body = self.get_json(self.api_url("api/ports")?).await?;
        let ports: Vec<Port> = unwrap_list(&body, "ports");
        debug!(count = ports.len(), "fetched ports");
        Ok(ports)
    }

    /// List every date with data, as ISO strings.
    ///
    /// `GET /api/dates`
    pub async fn fetch_dates(&self) -> Result<Vec<IsoDate>, Error> {
        let body = self.get_json(self.api_url("api/dates")?).await?;
        let dates: Vec<IsoDate> = unwrap_list(&body, "dates");
        debug!(count = dates.len(), "fetched dates");
        Ok(dates)
    }

    /// List every known vessel.
    ///
    /// `GET /api/vessels`
    pub async fn fetch_vessels(&self) -> Result<Vec<Vessel>, Error> {
        let body = self.get_json(self.api_url("api/vessels")?).await?;
        let vessels: Vec<Vessel> = unwrap_list(&body, "vessels");
        debug!(count = vessels.len(), "fetched vessels");
        Ok(vessels)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_named_field() {
        let ports: Vec<Port> = unwrap_list(&json!({ "ports": ["P1", "P2"] }), "ports");
        assert_eq!(ports, vec![Port::from("P1"), Port::from("P2")]);
    }

    #[test]
    fn missing_field_is_empty() {
        let ports: Vec<Port> = unwrap_list(&json!({}), "ports");
        assert!(ports.is_empty());
    }

    #[test]
    fn null_or_wrong_type_is_empty() {
        let a: Vec<Vessel> = unwrap_list(&json!({ "vessels": null }), "vessels");
        let b: Vec<Vessel> = unwrap_list(&json!({ "vessels": "V1" }), "vessels");
        let c: Vec<Vessel> = unwrap_list(&json!({ "vessels": [1, 2] }), "vessels");
        assert!(a.is_empty() && b.is_empty() && c.is_empty());
    }

    #[test]
    fn bare_array_is_accepted() {
        let dates: Vec<IsoDate> = unwrap_list(&json!(["2024-01-01"]), "dates");
        assert_eq!(dates, vec![IsoDate::from("2024-01-01")]);
    }

    #[test]
    fn scalar_body_is_empty() {
        let dates: Vec<IsoDate> = unwrap_list(&json!(42), "dates");
        assert!(dates.is_empty());
    }
}
