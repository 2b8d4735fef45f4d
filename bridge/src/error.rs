//! Error types for the Stream Bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Bridge is paused")]
    BridgePaused,

    // ========================================================================
    // Value & Fee Errors
    // ========================================================================

    #[error("Insufficient value: attached {attached}, transport fee {fee}")]
    InsufficientValue { attached: Uint128, fee: Uint128 },

    #[error("Arbiter fee {arbiter_fee} exceeds bridged amount {amount}")]
    ArbiterFeeExceedsAmount {
        arbiter_fee: Uint128,
        amount: Uint128,
    },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Nothing to claim")]
    NothingToClaim,

    // ========================================================================
    // Custody & Transport Errors
    // ========================================================================

    #[error("Dust refund failed: {reason}")]
    RefundTransferFailed { reason: String },

    #[error("Vault deposit failed: {reason}")]
    VaultDepositFailed { reason: String },

    #[error("Vault withdraw failed: {reason}")]
    VaultWithdrawFailed { reason: String },

    #[error("Transport publish failed: {reason}")]
    TransportPublishFailed { reason: String },

    #[error("Nonce counter exhausted")]
    NonceOverflow,

    // ========================================================================
    // Encoding Errors
    // ========================================================================

    #[error("Malformed field {field}: expected {expected} bytes, got {got}")]
    MalformedField {
        field: String,
        expected: usize,
        got: usize,
    },

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
