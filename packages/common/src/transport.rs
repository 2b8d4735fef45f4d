//! Cross-chain transport interface.
//!
//! The transport contract publishes opaque payloads for relay to the
//! destination chain. It charges a per-message fee in native currency and
//! reports the delivery sequence it assigned via the
//! [`SEQUENCE_ATTRIBUTE`] attribute on its `wasm` event.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin};

/// Attribute key under which the transport reports the assigned sequence.
pub const SEQUENCE_ATTRIBUTE: &str = "message.sequence";

/// Execute messages understood by the transport contract
#[cw_serde]
pub enum TransportExecuteMsg {
    /// Publish a payload. The current message fee must be attached.
    PostMessage {
        /// Emitter-side nonce, echoed back for correlation
        nonce: u32,
        /// Opaque payload bytes
        message: Binary,
        /// Finality level requested before the message is signed
        consistency_level: u8,
    },
}

/// Query messages understood by the transport contract
#[cw_serde]
#[derive(QueryResponses)]
pub enum TransportQueryMsg {
    /// Current fee charged per published message
    #[returns(MessageFeeResponse)]
    MessageFee {},
}

/// Response for [`TransportQueryMsg::MessageFee`]
#[cw_serde]
pub struct MessageFeeResponse {
    pub fee: Coin,
}
