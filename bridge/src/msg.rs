//! Message types for the Stream Bridge contract
//!
//! One execute variant per stream intent, plus administration and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, StdError, StdResult, Timestamp, Uint128};

use crate::payload::{DecodedMessage, Intent};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Message transport contract
    pub transport: String,
    /// Wrapped-asset vault contract
    pub vault: String,
    /// Denom accepted as attached value
    pub native_denom: String,
    /// Decimal precision of the native denom (at most 18)
    pub native_decimals: u8,
    /// Flat arbiter fee, in native units
    pub arbiter_fee: Uint128,
    /// Destination chain id (defaults to 1, Solana)
    pub target_chain: Option<u16>,
    /// Transport consistency level (defaults to 1)
    pub consistency_level: Option<u8>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
///
/// Every intent variant accepts native value in `info.funds`; the caller's own
/// identity in the payload is always the transaction sender.
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Stream Intents
    // ========================================================================
    /// Create the caller's program-derived account on the destination chain
    InitializePda {},

    /// Create the caller's token account for `token_mint`
    InitializeTokenAccount { token_mint: Binary },

    /// Deposit tokens into the caller's destination account
    DepositToken { amount: u64, token_mint: Binary },

    /// Open a token stream to `receiver`
    StreamCreate {
        start_time: u64,
        end_time: u64,
        amount: u64,
        receiver: Binary,
        can_update: bool,
        can_cancel: bool,
        token_mint: Binary,
    },

    /// Update schedule and amount of an existing stream
    StreamUpdate {
        start_time: u64,
        end_time: u64,
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },

    /// Withdraw streamed tokens as the receiver of `depositor`'s stream
    StreamWithdraw {
        depositor: Binary,
        token_mint: Binary,
        data_account: Binary,
    },

    /// Pause or resume a stream
    StreamPause {
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },

    /// Cancel a stream
    StreamCancel {
        receiver: Binary,
        token_mint: Binary,
        data_account: Binary,
    },

    /// Transfer deposited tokens to `receiver` immediately
    InstantTransfer {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },

    /// Withdraw deposited tokens back to the caller
    TokenWithdraw { amount: u64, token_mint: Binary },

    /// Bridge native-chain tokens directly to `receiver`
    DirectTransferNative {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },

    /// Bridge wrapped tokens directly to `receiver`
    DirectTransferWrapped {
        amount: u64,
        receiver: Binary,
        token_mint: Binary,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Change the destination chain id
    SetTargetChain { chain_id: u16 },

    /// Change the flat arbiter fee
    SetArbiterFee { arbiter_fee: Uint128 },

    /// Change the transport consistency level
    SetConsistencyLevel { consistency_level: u8 },

    /// Hand administration to another address
    UpdateAdmin { new_admin: String },

    /// Send the contract's whole native balance to the admin
    ClaimNative {},

    /// Withdraw the contract's whole vault balance and send it to the admin
    ClaimWrapped {},

    /// Stop accepting intents
    Pause {},

    /// Resume accepting intents
    Unpause {},
}

impl TryFrom<ExecuteMsg> for Intent {
    type Error = StdError;

    fn try_from(msg: ExecuteMsg) -> StdResult<Self> {
        let intent = match msg {
            ExecuteMsg::InitializePda {} => Intent::InitializePda {},
            ExecuteMsg::InitializeTokenAccount { token_mint } => {
                Intent::InitializeTokenAccount { token_mint }
            }
            ExecuteMsg::DepositToken { amount, token_mint } => {
                Intent::DepositToken { amount, token_mint }
            }
            ExecuteMsg::StreamCreate {
                start_time,
                end_time,
                amount,
                receiver,
                can_update,
                can_cancel,
                token_mint,
            } => Intent::StreamCreate {
                start_time,
                end_time,
                amount,
                receiver,
                can_update,
                can_cancel,
                token_mint,
            },
            ExecuteMsg::StreamUpdate {
                start_time,
                end_time,
                amount,
                receiver,
                token_mint,
                data_account,
            } => Intent::StreamUpdate {
                start_time,
                end_time,
                amount,
                receiver,
                token_mint,
                data_account,
            },
            ExecuteMsg::StreamWithdraw {
                depositor,
                token_mint,
                data_account,
            } => Intent::StreamWithdraw {
                depositor,
                token_mint,
                data_account,
            },
            ExecuteMsg::StreamPause {
                receiver,
                token_mint,
                data_account,
            } => Intent::StreamPause {
                receiver,
                token_mint,
                data_account,
            },
            ExecuteMsg::StreamCancel {
                receiver,
                token_mint,
                data_account,
            } => Intent::StreamCancel {
                receiver,
                token_mint,
                data_account,
            },
            ExecuteMsg::InstantTransfer {
                amount,
                receiver,
                token_mint,
            } => Intent::InstantTransfer {
                amount,
                receiver,
                token_mint,
            },
            ExecuteMsg::TokenWithdraw { amount, token_mint } => {
                Intent::TokenWithdraw { amount, token_mint }
            }
            ExecuteMsg::DirectTransferNative {
                amount,
                receiver,
                token_mint,
            } => Intent::DirectTransferNative {
                amount,
                receiver,
                token_mint,
            },
            ExecuteMsg::DirectTransferWrapped {
                amount,
                receiver,
                token_mint,
            } => Intent::DirectTransferWrapped {
                amount,
                receiver,
                token_mint,
            },
            _ => return Err(StdError::generic_err("not an intent message")),
        };
        Ok(intent)
    }
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns bridge statistics
    #[returns(StatsResponse)]
    Stats {},

    /// Returns the nonce of the latest published message
    #[returns(NonceResponse)]
    CurrentNonce {},

    /// Returns the dispatch record for a nonce
    #[returns(Option<DispatchResponse>)]
    Dispatch { nonce: u32 },

    /// Returns dispatch records in nonce order
    #[returns(DispatchesResponse)]
    Dispatches {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    /// Preview how `attached` would be split at the current transport fee
    #[returns(SimulationResponse)]
    SimulateDispatch { attached: Uint128 },

    /// Encode an intent as if `caller` had sent it
    #[returns(EncodeResponse)]
    EncodeIntent { caller: String, intent: Intent },

    /// Decode a canonical payload
    #[returns(DecodedMessage)]
    DecodePayload { payload: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub paused: bool,
    pub target_chain: u16,
    pub consistency_level: u8,
    pub transport: Addr,
    pub vault: Addr,
    pub native_denom: String,
    pub native_decimals: u8,
    pub arbiter_fee: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_dispatched: u64,
    pub total_custodied: Uint128,
    pub total_dust_refunded: Uint128,
    pub total_transport_fees: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u32,
}

#[cw_serde]
pub struct DispatchResponse {
    pub nonce: u32,
    pub kind: String,
    pub tag: u8,
    pub sender: Addr,
    pub target_chain: u16,
    pub payload: Binary,
    pub payload_hash: Binary,
    pub transport_fee: Uint128,
    pub custodied: Uint128,
    pub dust: Uint128,
    pub normalized_amount: Uint128,
    pub normalized_arbiter_fee: Uint128,
    pub sequence: Option<u64>,
    pub dispatched_at: Timestamp,
}

#[cw_serde]
pub struct DispatchesResponse {
    pub dispatches: Vec<DispatchResponse>,
}

#[cw_serde]
pub struct SimulationResponse {
    pub attached: Uint128,
    pub transport_fee: Uint128,
    pub custodied: Uint128,
    pub dust: Uint128,
    pub normalized_amount: Uint128,
    pub normalized_arbiter_fee: Uint128,
}

#[cw_serde]
pub struct EncodeResponse {
    pub tag: u8,
    pub payload: Binary,
    pub payload_hash: Binary,
}

/// Response data set on a successful publish
#[cw_serde]
pub struct PublishedResponse {
    pub nonce: u32,
    pub sequence: u64,
}
