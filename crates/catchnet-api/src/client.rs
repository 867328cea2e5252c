// CatchNet API HTTP client
//
// Wraps `reqwest::Client` with base-URL handling, status checking and
// JSON decoding. Endpoint methods live in `filters` and `views` as
// inherent impls so this module stays focused on transport mechanics.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{IsoDate, Port};
use crate::transport::TransportConfig;

/// Where the API lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Stateless HTTP client for the CatchNet API.
///
/// Every call is a single GET with no retry and no caching. Failures are
/// returned to the caller untouched.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API root (e.g. `http://127.0.0.1:8000`); a path
    /// prefix such as `https://host/catchnet` is preserved.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Build a URL scoped to a (port, date) pair.
    ///
    /// The port is form-encoded (a space becomes `+`). The date is
    /// appended as given.
    pub(crate) fn scoped_url(&self, path: &str, port: &Port, date: &IsoDate) -> Result<Url, Error> {
        let mut url = self.api_url(path)?;
        let port: String = url::form_urlencoded::byte_serialize(port.as_str().as_bytes()).collect();
        url.set_query(Some(&format!("port={port}&date={date}")));
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the body as JSON.
    ///
    /// Any non-2xx status is a generic [`Error::RequestFailed`]; the body
    /// of a failed response is never read.
    pub(crate) async fn get_json(&self, url: Url) -> Result<serde_json::Value, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "request failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn api_url_joins_without_double_slash() {
        let c = client("http://127.0.0.1:8000/");
        assert_eq!(
            c.api_url("/api/ports").unwrap().as_str(),
            "http://127.0.0.1:8000/api/ports"
        );
    }

    #[test]
    fn api_url_keeps_path_prefix() {
        let c = client("https://dash.example.com/catchnet");
        assert_eq!(
            c.api_url("api/dates").unwrap().as_str(),
            "https://dash.example.com/catchnet/api/dates"
        );
    }

    #[test]
    fn scoped_url_encodes_port_but_not_date() {
        let c = client(DEFAULT_BASE_URL);
        let url = c
            .scoped_url(
                "api/daily_view",
                &Port::from("Port A&B"),
                &IsoDate::from("2024-03-01"),
            )
            .unwrap();
        assert_eq!(url.query(), Some("port=Port+A%26B&date=2024-03-01"));
    }
}
