// Transport configuration for building reqwest::Client instances.
//
// The Junos REST service (`set system services rest`) listens on port 3000
// for HTTP and 3443 for HTTPS by default; devices almost always present a
// self-signed certificate, so certificate verification is configurable.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::Error;

/// TLS verification mode for the device connection.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed device certs).
    DangerAcceptInvalid,
}

/// Transport configuration for the device HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    /// Connect over HTTPS (REST service TLS listener).
    pub https: bool,
    /// REST service port. Junos defaults: 3000 for HTTP, 3443 for HTTPS.
    pub port: u16,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_secs(30),
            https: true,
            port: 3443,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("junos-query/", env!("CARGO_PKG_VERSION")));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Build the REST service base URL for a bare hostname or address.
    pub fn base_url(&self, host: &str) -> Result<Url, Error> {
        let scheme = if self.https { "https" } else { "http" };
        Ok(Url::parse(&format!("{scheme}://{host}:{port}/", port = self.port))?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn base_url_uses_scheme_and_port() {
        let config = TransportConfig::default();
        let url = config.base_url("srx.example.net").unwrap();
        assert_eq!(url.as_str(), "https://srx.example.net:3443/");

        let config = TransportConfig {
            https: false,
            port: 3000,
            ..TransportConfig::default()
        };
        let url = config.base_url("10.0.0.1").unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.1:3000/");
    }

    #[test]
    fn base_url_rejects_garbage_host() {
        let config = TransportConfig::default();
        assert!(config.base_url("no spaces allowed").is_err());
    }
}
