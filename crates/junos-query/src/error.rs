use thiserror::Error;

/// Top-level error type for the `junos-query` crate.
///
/// Only hard failures surface here: session setup, transport, HTTP-level
/// RPC rejection, and response parsing. A query whose expected response
/// path is simply absent is NOT an error -- it degrades to the zero-entry
/// record (see the query methods on [`JunosClient`](crate::JunosClient)).
#[derive(Debug, Error)]
pub enum Error {
    // ── Session ─────────────────────────────────────────────────────
    /// Device rejected the supplied credentials.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// A query was issued with no open session.
    #[error("Not connected -- call connect() before issuing queries")]
    NotConnected,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Device URL could not be built from the supplied host.
    #[error("Invalid device URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── RPC ─────────────────────────────────────────────────────────
    /// The REST service answered with a non-success HTTP status.
    #[error("RPC {rpc} failed (HTTP {status}): {body}")]
    Rpc {
        rpc: String,
        status: u16,
        body: String,
    },

    /// Response body was not the expected JSON, with the raw body for
    /// debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means session establishment failed.
    ///
    /// Errors out of `connect()` are fatal at this layer: the client makes
    /// no retry attempt, and callers should treat them as setup failures
    /// rather than transient conditions.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Authentication { .. } | Self::Tls(_) | Self::InvalidUrl(_) => true,
            Self::Transport(e) => e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if the device rejected the supplied credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
