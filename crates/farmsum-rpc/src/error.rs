//! Error types for daemon RPC.

use std::path::PathBuf;

use farmsum_core::ServiceKind;

/// Errors that can occur while calling a daemon.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Client certificate or key could not be read or parsed.
    #[error("failed to load client certificate {}: {reason}", .path.display())]
    CertificateLoad { path: PathBuf, reason: String },

    #[error("TLS configuration error: {0}")]
    TlsConfiguration(String),

    /// Connect, handshake, send or body read failed.
    #[error("error accessing {service} RPC at {url}: {reason}")]
    Connection {
        service: ServiceKind,
        url: String,
        reason: String,
    },

    #[error("{service} RPC returned HTTP {status} for {method}")]
    HttpStatus {
        service: ServiceKind,
        method: String,
        status: u16,
    },

    #[error("{service} RPC response to {method} is not valid JSON: {reason}")]
    InvalidJson {
        service: ServiceKind,
        method: String,
        reason: String,
    },

    /// Valid JSON without the fields the summary needs.
    #[error("{service} RPC response to {method} is malformed: {reason}")]
    MalformedResponse {
        service: ServiceKind,
        method: String,
        reason: String,
    },

    /// The daemon answered `success: false`.
    #[error("{service} RPC {method} failed: {message}")]
    Service {
        service: ServiceKind,
        method: String,
        message: String,
    },
}

/// Result type alias using [`RpcError`].
pub type Result<T> = std::result::Result<T, RpcError>;

/// Render an error with its full source chain, `outer: inner: root`.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
