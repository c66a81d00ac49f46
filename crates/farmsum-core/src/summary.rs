//! The derived farm summary and its text rendering.

use std::fmt;

use crate::types::{BlockchainStateResponse, FarmedAmountResponse, PlotsResponse, SyncState};
use crate::units::{format_bytes, format_minutes, mojo_to_xch};

/// Target average time between transaction blocks: 32 blocks per 10 minutes.
pub const AVERAGE_BLOCK_TIME_SECS: f64 = 18.75;

/// Overall farming state, as reported on the `Farming status` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmingStatus {
    Syncing,
    NotSynced,
    NotRunning,
    Farming,
}

impl FarmingStatus {
    /// Node sync state takes precedence over the farmer check. Without a
    /// sync block only the farmer check applies.
    pub fn evaluate(sync: Option<SyncState>, farmer_running: bool) -> Self {
        match sync {
            Some(sync) if sync.sync_mode => FarmingStatus::Syncing,
            Some(sync) if !sync.synced => FarmingStatus::NotSynced,
            _ if !farmer_running => FarmingStatus::NotRunning,
            _ => FarmingStatus::Farming,
        }
    }
}

impl fmt::Display for FarmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FarmingStatus::Syncing => "Syncing",
            FarmingStatus::NotSynced => "Not synced or not connected to peers",
            FarmingStatus::NotRunning => "Not running",
            FarmingStatus::Farming => "Farming",
        };
        f.write_str(s)
    }
}

/// Everything printed by `farmsum summary`, computed from the four RPC
/// responses.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmSummary {
    pub farmer_running: bool,
    pub farming_status: FarmingStatus,
    pub farmed_amount_mojo: u64,
    pub last_height_farmed: Option<u32>,
    pub plot_count: usize,
    pub total_plot_bytes: u128,
    pub network_space_bytes: u128,
}

impl FarmSummary {
    pub fn new(
        state: &BlockchainStateResponse,
        farmed: &FarmedAmountResponse,
        farmer_running: bool,
        plots: &PlotsResponse,
    ) -> Self {
        Self {
            farmer_running,
            farming_status: FarmingStatus::evaluate(state.blockchain_state.sync, farmer_running),
            farmed_amount_mojo: farmed.farmed_amount,
            last_height_farmed: farmed.last_height_farmed,
            plot_count: plots.count(),
            total_plot_bytes: plots.total_size(),
            network_space_bytes: state.blockchain_state.space,
        }
    }

    pub fn farmed_amount_xch(&self) -> f64 {
        mojo_to_xch(self.farmed_amount_mojo)
    }

    /// Expected minutes until this farm wins a block, from its share of the
    /// network space. `None` when there are no plots or no reported space.
    pub fn expected_minutes_to_win(&self) -> Option<u64> {
        if self.total_plot_bytes == 0 || self.network_space_bytes == 0 {
            return None;
        }
        // blocks until a win = space / plot size
        let blocks = self.network_space_bytes as f64 / self.total_plot_bytes as f64;
        let minutes = (AVERAGE_BLOCK_TIME_SECS / 60.0) * blocks;
        Some(minutes.floor() as u64)
    }
}

impl fmt::Display for FarmSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Farmer running: {}", self.farmer_running)?;
        writeln!(f, "Farming status: {}", self.farming_status)?;
        writeln!(
            f,
            "Farmed Amount: {} Mojo ({:.6} XCH)",
            self.farmed_amount_mojo,
            self.farmed_amount_xch()
        )?;
        if let Some(height) = self.last_height_farmed {
            writeln!(f, "Last height farmed: {height}")?;
        }
        writeln!(f, "Number of plots: {}", self.plot_count)?;
        writeln!(f, "Total plot size: {}", format_bytes(self.total_plot_bytes))?;
        writeln!(
            f,
            "Estimated network space: {}",
            format_bytes(self.network_space_bytes)
        )?;
        writeln!(
            f,
            "Expected time to win: {}",
            format_minutes(self.expected_minutes_to_win())
        )
    }
}
