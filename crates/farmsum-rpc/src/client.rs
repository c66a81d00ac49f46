//! Typed calls to the four daemons and summary orchestration.

use farmsum_core::{
    BlockchainStateResponse, ConnectionsResponse, Endpoints, FarmSummary, FarmedAmountResponse,
    PlotsResponse, RpcEnvelope, ServiceKind,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::error::Category;
use tracing::{debug, info, warn};

use crate::error::{Result, RpcError};
use crate::transport::RpcTransport;

/// RPC method names, used as the URL path.
pub mod methods {
    pub const GET_BLOCKCHAIN_STATE: &str = "get_blockchain_state";
    pub const GET_FARMED_AMOUNT: &str = "get_farmed_amount";
    pub const GET_CONNECTIONS: &str = "get_connections";
    pub const GET_PLOTS: &str = "get_plots";
}

/// Decode a response body into `T`.
///
/// Syntax errors are [`RpcError::InvalidJson`]; valid JSON lacking required
/// fields is [`RpcError::MalformedResponse`]; `"success": false` is
/// [`RpcError::Service`].
pub fn decode_response<T: DeserializeOwned>(
    service: ServiceKind,
    method: &str,
    body: &str,
) -> Result<T> {
    serde_json::from_str::<IgnoredAny>(body).map_err(|e| RpcError::InvalidJson {
        service,
        method: method.to_string(),
        reason: e.to_string(),
    })?;

    let malformed = |e: serde_json::Error| match e.classify() {
        Category::Syntax | Category::Eof => RpcError::InvalidJson {
            service,
            method: method.to_string(),
            reason: e.to_string(),
        },
        Category::Data | Category::Io => RpcError::MalformedResponse {
            service,
            method: method.to_string(),
            reason: e.to_string(),
        },
    };

    let envelope: RpcEnvelope = serde_json::from_str(body).map_err(malformed)?;
    if let Some(message) = envelope.failure() {
        return Err(RpcError::Service {
            service,
            method: method.to_string(),
            message: message.to_string(),
        });
    }

    serde_json::from_str(body).map_err(malformed)
}

/// Client for the full node, wallet, farmer and harvester RPC services.
///
/// Calls are issued one at a time; each completes before the next starts.
pub struct FarmClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: RpcTransport> FarmClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(&self, service: ServiceKind, method: &str) -> Result<R> {
        let endpoint = self.endpoints.get(service);
        let body = self.transport.post(endpoint, method).await?;
        debug!(%service, method, %body, "RPC response");
        decode_response(service, method, &body)
    }

    /// Full node blockchain state, including estimated network space.
    pub async fn blockchain_state(&self) -> Result<BlockchainStateResponse> {
        self.call(ServiceKind::FullNode, methods::GET_BLOCKCHAIN_STATE)
            .await
    }

    /// Total amount farmed by the wallet, in mojo.
    pub async fn farmed_amount(&self) -> Result<FarmedAmountResponse> {
        self.call(ServiceKind::Wallet, methods::GET_FARMED_AMOUNT).await
    }

    pub async fn farmer_connections(&self) -> Result<ConnectionsResponse> {
        self.call(ServiceKind::Farmer, methods::GET_CONNECTIONS).await
    }

    /// Whether the farmer has at least one peer connection.
    ///
    /// A farmer process that is up but has no connections reports `false`.
    pub async fn is_farmer_running(&self) -> Result<bool> {
        let connections = self.farmer_connections().await?;
        info!(connections = connections.count(), "farmer connections");
        Ok(connections.count() > 0)
    }

    /// Plots known to the harvester.
    pub async fn plots(&self) -> Result<PlotsResponse> {
        let plots: PlotsResponse = self
            .call(ServiceKind::Harvester, methods::GET_PLOTS)
            .await?;

        if !plots.failed_to_open_filenames.is_empty() {
            warn!(
                count = plots.failed_to_open_filenames.len(),
                "harvester failed to open some plot files"
            );
        }
        if !plots.not_found_filenames.is_empty() {
            warn!(
                count = plots.not_found_filenames.len(),
                "harvester could not find some plot files"
            );
        }

        Ok(plots)
    }

    /// Query all four services in order and derive the summary. The first
    /// failing call aborts the rest.
    pub async fn summary(&self) -> Result<FarmSummary> {
        let state = self.blockchain_state().await?;
        let farmed = self.farmed_amount().await?;
        let farmer_running = self.is_farmer_running().await?;
        let plots = self.plots().await?;

        Ok(FarmSummary::new(&state, &farmed, farmer_running, &plots))
    }
}
