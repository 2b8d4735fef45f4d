//! Stream Bridge Contract - Cross-Chain Token Streaming Intents
//!
//! This contract turns token-streaming requests made on Terra Classic into
//! canonical binary messages for a streaming program on another chain, and
//! publishes them through a generic message transport.
//!
//! # Outgoing Flow
//! 1. User calls an intent (deposit, stream create, withdraw, ...) with native value
//! 2. The attached value is split into transport fee, custodied value and dust
//! 3. Dust is refunded, custodied value is deposited into the wrapped vault
//! 4. The payload is published with the next nonce; the transport sequence
//!    is recorded when the publish reply arrives
//!
//! # Security
//! - The caller's identity in each payload is derived from the sender
//! - Nonces advance only for messages that were published
//! - Emergency pause functionality

pub mod amount;
pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod hash;
pub mod msg;
pub mod payload;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::fee_manager::{reconcile, FeeConfig};
pub use crate::hash::keccak256;
pub use crate::payload::{DecodedMessage, Intent};
