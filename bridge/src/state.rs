//! State definitions for the Stream Bridge contract
//!
//! Configuration, the shared message nonce and the per-nonce dispatch log.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Whether intent dispatch is currently paused
    pub paused: bool,
    /// Transport chain id of the destination program (1 = Solana)
    pub target_chain: u16,
    /// Finality requested from the transport for each message
    pub consistency_level: u8,
    /// Message transport contract
    pub transport: Addr,
    /// Wrapped-asset vault contract (a CW20 with deposit/withdraw)
    pub vault: Addr,
}

/// Record of one published message, keyed by its nonce
#[cw_serde]
pub struct DispatchRecord {
    pub nonce: u32,
    /// Intent kind, e.g. `deposit_token`
    pub kind: String,
    pub tag: u8,
    pub sender: Addr,
    pub target_chain: u16,
    pub payload: Binary,
    /// keccak256 of `payload`
    pub payload_hash: Binary,
    pub transport_fee: Uint128,
    pub custodied: Uint128,
    pub dust: Uint128,
    pub normalized_amount: Uint128,
    pub normalized_arbiter_fee: Uint128,
    /// Transport sequence, filled in once the publish reply arrives
    pub sequence: Option<u64>,
    pub dispatched_at: Timestamp,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Total number of published messages
    pub total_dispatched: u64,
    /// Total native value moved into the vault
    pub total_custodied: Uint128,
    /// Total dust handed back to callers
    pub total_dust_refunded: Uint128,
    /// Total fees paid to the transport
    pub total_transport_fees: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:stream-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wormhole chain id of Solana
pub const DEFAULT_TARGET_CHAIN: u16 = 1;

/// Default transport consistency level (confirmed)
pub const DEFAULT_CONSISTENCY_LEVEL: u8 = 1;

/// Reply ids for custody sub-messages. Publish replies use the message
/// nonce as id, so these sit above the `u32` range.
pub const REFUND_REPLY_ID: u64 = 1 << 32;
pub const VAULT_DEPOSIT_REPLY_ID: u64 = (1 << 32) + 1;
pub const VAULT_WITHDRAW_REPLY_ID: u64 = (1 << 32) + 2;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Nonce of the most recently published message (0 before the first)
pub const NONCE: Item<u32> = Item::new("nonce");

/// Dispatch log
/// Key: nonce, Value: DispatchRecord
pub const DISPATCHES: Map<u32, DispatchRecord> = Map::new("dispatches");
