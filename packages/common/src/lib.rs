//! Common - Shared Interface Types for Stream Bridge Contracts
//!
//! This package defines the message types the bridge uses to talk to its
//! external collaborators:
//! - `transport` - the cross-chain messaging contract that relays payloads
//! - `vault` - the wrapped-native-asset contract that custodies value

pub mod transport;
pub mod vault;

pub use transport::{
    MessageFeeResponse, TransportExecuteMsg, TransportQueryMsg, SEQUENCE_ATTRIBUTE,
};
pub use vault::{VaultExecuteMsg, VaultQueryMsg};
