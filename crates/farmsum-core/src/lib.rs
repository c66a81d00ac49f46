//! farmsum core: the pieces of a farm summary that do not touch the network.
//!
//! - Service endpoints and the `farmsum.toml` configuration file
//! - Typed responses for the four RPC methods the summary consumes
//! - The derived [`FarmSummary`] and its text rendering
//! - Byte, coin and duration formatting

pub mod config;
pub mod error;
pub mod summary;
pub mod types;
pub mod units;

pub use config::{Endpoints, FarmsumConfig, ServiceConfig, ServiceEndpoint, ServiceKind};
pub use error::ConfigError;
pub use summary::{FarmSummary, FarmingStatus};
pub use types::{
    BlockchainState, BlockchainStateResponse, ConnectionsResponse, FarmedAmountResponse,
    PlotInfo, PlotsResponse, RpcEnvelope, SyncState,
};
