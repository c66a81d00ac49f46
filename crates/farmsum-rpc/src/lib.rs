//! farmsum RPC layer.
//!
//! - Client identity loading and the rustls client config ([`tls`])
//! - One-shot HTTPS POST transport behind the [`RpcTransport`] trait
//! - [`FarmClient`]: typed calls to the four daemons and summary orchestration

pub mod client;
pub mod error;
pub mod tls;
pub mod transport;

pub use client::{decode_response, methods, FarmClient};
pub use error::{Result, RpcError};
pub use tls::{build_client_tls_config, AcceptAnyServerCert, ClientIdentity};
pub use transport::{HttpsTransport, RpcTransport};
