//! One-shot HTTPS transport for daemon RPC.
//!
//! Every call loads the service's client identity, builds its own HTTP
//! client and drops it once the body is read, so no connection outlives a
//! call.

use async_trait::async_trait;
use farmsum_core::ServiceEndpoint;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{error_chain, Result, RpcError};
use crate::tls::{build_client_tls_config, ClientIdentity};

/// Sends an RPC request and returns the raw response body.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// POST an empty JSON object to `method` on `endpoint`.
    ///
    /// Any status other than 200 is an [`RpcError::HttpStatus`].
    async fn post(&self, endpoint: &ServiceEndpoint, method: &str) -> Result<String>;
}

/// Mutual-TLS HTTPS transport backed by reqwest and rustls.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsTransport;

impl HttpsTransport {
    pub fn new() -> Self {
        Self
    }

    fn client_for(endpoint: &ServiceEndpoint) -> Result<reqwest::Client> {
        let identity = ClientIdentity::load(&endpoint.cert_path, &endpoint.key_path)?;
        let tls = build_client_tls_config(identity)?;

        reqwest::Client::builder()
            .use_preconfigured_tls(tls)
            .build()
            .map_err(|e| RpcError::TlsConfiguration(format!("http client: {}", error_chain(&e))))
    }
}

#[async_trait]
impl RpcTransport for HttpsTransport {
    async fn post(&self, endpoint: &ServiceEndpoint, method: &str) -> Result<String> {
        let client = Self::client_for(endpoint)?;
        let url = endpoint.url(method);
        let connection_error = |e: reqwest::Error| RpcError::Connection {
            service: endpoint.kind,
            url: url.clone(),
            reason: error_chain(&e),
        };

        debug!(service = %endpoint.kind, %url, "sending RPC request");

        let response = client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(connection_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RpcError::HttpStatus {
                service: endpoint.kind,
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(connection_error)
    }
}
