// Device client: session lifecycle and RPC transport mechanics.
//
// Junos-specific URL construction, Basic auth, status classification, and
// JSON body parsing all live here. The query endpoints (nat, zones,
// interfaces) are implemented as inherent methods in separate files so this
// module stays focused on transport mechanics.

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;

/// RPC issued by `connect()` to verify reachability and credentials.
const PROBE_RPC: &str = "get-system-uptime-information";

/// An open session: the HTTP client plus the device base URL.
struct Session {
    http: reqwest::Client,
    base_url: Url,
}

/// Read-only query client for a single Junos device.
///
/// Drive it sequentially from one logical caller: construct with
/// credentials, `connect()` to a host, issue queries, `close()`. Queries
/// share the open session but no other state; issuing the same query twice
/// against an unchanged device yields identical results.
pub struct JunosClient {
    credentials: Credentials,
    transport: TransportConfig,
    session: Option<Session>,
}

impl JunosClient {
    /// Create a client holding credentials and transport settings.
    /// Performs no I/O; call [`connect`](Self::connect) to open a session.
    pub fn new(credentials: Credentials, transport: TransportConfig) -> Self {
        Self {
            credentials,
            transport,
            session: None,
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Open a session to the device REST service on `host`.
    ///
    /// Builds the base URL from the transport config and issues one probe
    /// RPC to surface unreachable hosts and bad credentials immediately.
    /// Any error returned here is fatal at this layer: no retry is
    /// attempted, and the client is left without a session.
    pub async fn connect(&mut self, host: &str) -> Result<(), Error> {
        let base_url = self.transport.base_url(host)?;
        self.connect_url(base_url).await
    }

    /// Open a session against a pre-built base URL.
    ///
    /// Use this when the service URL doesn't follow the standard
    /// scheme/host/port form (reverse proxies, test servers).
    pub async fn connect_url(&mut self, base_url: Url) -> Result<(), Error> {
        let http = self.transport.build_client()?;
        debug!("connecting to {base_url}");
        self.session = Some(Session { http, base_url });

        if let Err(err) = self.rpc(PROBE_RPC, &[]).await {
            self.session = None;
            return Err(err);
        }
        Ok(())
    }

    /// Terminate the session. Idempotent; a no-op without a prior connect.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Whether a session is currently open.
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    // ── RPC helper ───────────────────────────────────────────────────

    /// Issue a Junos RPC as `GET {base}/rpc/{rpc}` with JSON output.
    ///
    /// Arguments go in the query string; flag-style arguments (`terse`,
    /// `all`) are passed with an empty value. Returns the parsed response
    /// body -- path descent into the vendor shape is the caller's job.
    pub(crate) async fn rpc(&self, rpc: &str, args: &[(&str, &str)]) -> Result<Value, Error> {
        let session = self.session.as_ref().ok_or(Error::NotConnected)?;

        let mut url = session.base_url.join(&format!("rpc/{rpc}"))?;
        if !args.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in args {
                pairs.append_pair(key, value);
            }
        }

        debug!("GET {url}");
        let resp = session
            .http
            .get(url)
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose_secret()),
            )
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: format!("device rejected credentials (HTTP {status})"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        if !status.is_success() {
            return Err(Error::Rpc {
                rpc: rpc.to_owned(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
