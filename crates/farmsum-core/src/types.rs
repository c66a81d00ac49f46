//! Typed responses for the RPC methods a farm summary consumes.
//!
//! Only the fields the summary reads are modelled; everything else the
//! daemons send is ignored. Required fields have no serde default, so a
//! response missing one fails to decode instead of reading as zero.

use serde::Deserialize;

/// Fields every RPC response may carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RpcEnvelope {
    /// The daemon's error message when it explicitly reported failure.
    pub fn failure(&self) -> Option<&str> {
        match self.success {
            Some(false) => Some(self.error.as_deref().unwrap_or("unknown error")),
            _ => None,
        }
    }
}

/// Full node `get_blockchain_state`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainStateResponse {
    pub blockchain_state: BlockchainState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockchainState {
    /// Estimated network space in bytes.
    pub space: u128,
    #[serde(default)]
    pub sync: Option<SyncState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SyncState {
    #[serde(default)]
    pub sync_mode: bool,
    #[serde(default)]
    pub synced: bool,
}

/// Wallet `get_farmed_amount`.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmedAmountResponse {
    /// Total farmed, in mojo.
    pub farmed_amount: u64,
    #[serde(default)]
    pub last_height_farmed: Option<u32>,
}

/// Farmer `get_connections`. Only the number of entries matters.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionsResponse {
    pub connections: Vec<serde_json::Value>,
}

impl ConnectionsResponse {
    pub fn count(&self) -> usize {
        self.connections.len()
    }
}

/// Harvester `get_plots`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlotsResponse {
    pub plots: Vec<PlotInfo>,
    #[serde(default)]
    pub failed_to_open_filenames: Vec<String>,
    #[serde(default)]
    pub not_found_filenames: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlotInfo {
    /// Plot file size in bytes.
    pub file_size: u64,
}

impl PlotsResponse {
    pub fn count(&self) -> usize {
        self.plots.len()
    }

    /// Sum of all plot file sizes in bytes.
    pub fn total_size(&self) -> u128 {
        self.plots.iter().map(|p| u128::from(p.file_size)).sum()
    }
}
