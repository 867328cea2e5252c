// ── Runtime client configuration ──
//
// Describes *where* the API lives and how to reach it. Never touches
// disk: `catchnet-config` (or a test) builds a `ClientConfig` and hands it in.

use std::time::Duration;

use url::Url;

use catchnet_api::DEFAULT_BASE_URL;
use catchnet_api::transport::{TlsMode, TransportConfig};

/// TLS trust strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Built-in root store.
    #[default]
    SystemDefaults,
    /// Also trust a custom CA certificate file.
    CustomCa(std::path::PathBuf),
}

/// Configuration for talking to one CatchNet API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root (e.g., `http://127.0.0.1:8000`).
    pub base_url: Url,
    /// TLS trust strategy.
    pub tls: TlsVerification,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            tls: TlsVerification::default(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api_without_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8000/");
        assert!(config.timeout.is_none());
        assert!(config.transport().timeout.is_none());
    }

    #[test]
    fn custom_ca_maps_to_transport() {
        let config = ClientConfig {
            tls: TlsVerification::CustomCa("/etc/catchnet/ca.pem".into()),
            ..ClientConfig::default()
        };
        assert!(matches!(config.transport().tls, TlsMode::CustomCa(_)));
    }
}
