//! Shared fixtures for cross-crate scenarios.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use farmsum_core::config::ChiaConfig;
use farmsum_core::{Endpoints, FarmsumConfig, ServiceEndpoint, ServiceKind};
use farmsum_rpc::{FarmClient, RpcError, RpcTransport};
use serde_json::Value;

/// What a scripted service answers.
#[derive(Debug, Clone)]
pub enum Scripted {
    Json(Value),
    Raw(String),
    HttpStatus(u16),
}

/// In-memory transport answering each service from a script.
///
/// Every request is recorded as `(service, method)` in call order.
#[derive(Default)]
pub struct ScriptedTransport {
    script: HashMap<ServiceKind, Scripted>,
    calls: Mutex<Vec<(ServiceKind, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four healthy responses of a small farm: 2 plots of 1 KiB total,
    /// 2000 bytes of network space, 5 XCH farmed, one farmer connection.
    pub fn small_farm() -> Self {
        Self::new()
            .reply(
                ServiceKind::FullNode,
                Scripted::Json(serde_json::json!({
                    "blockchain_state": {"space": 2000},
                    "success": true
                })),
            )
            .reply(
                ServiceKind::Wallet,
                Scripted::Json(serde_json::json!({
                    "farmed_amount": 5_000_000_000_000u64,
                    "success": true
                })),
            )
            .reply(
                ServiceKind::Farmer,
                Scripted::Json(serde_json::json!({"connections": [{}], "success": true})),
            )
            .reply(
                ServiceKind::Harvester,
                Scripted::Json(serde_json::json!({
                    "plots": [{"file_size": 600}, {"file_size": 424}],
                    "success": true
                })),
            )
    }

    pub fn reply(mut self, service: ServiceKind, reply: Scripted) -> Self {
        self.script.insert(service, reply);
        self
    }

    pub fn calls(&self) -> Vec<(ServiceKind, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn post(&self, endpoint: &ServiceEndpoint, method: &str) -> farmsum_rpc::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.kind, method.to_string()));

        match self.script.get(&endpoint.kind) {
            Some(Scripted::Json(value)) => Ok(value.to_string()),
            Some(Scripted::Raw(body)) => Ok(body.clone()),
            Some(Scripted::HttpStatus(status)) => Err(RpcError::HttpStatus {
                service: endpoint.kind,
                method: method.to_string(),
                status: *status,
            }),
            None => Err(RpcError::Connection {
                service: endpoint.kind,
                url: endpoint.url(method),
                reason: "connection refused".into(),
            }),
        }
    }
}

/// Endpoints under a fixed, fake install root.
pub fn test_endpoints() -> Endpoints {
    let config = FarmsumConfig {
        chia: ChiaConfig {
            root: Some(PathBuf::from("/srv/chia/mainnet")),
        },
        ..Default::default()
    };
    config
        .endpoints()
        .expect("configured root never needs a home directory")
}

pub fn client(transport: ScriptedTransport) -> FarmClient<ScriptedTransport> {
    FarmClient::new(transport, test_endpoints())
}
