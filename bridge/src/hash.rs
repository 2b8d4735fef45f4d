//! Hashing and 32-byte slot helpers.
//!
//! The destination program reads every address-like field and the chain
//! identifier as a 32-byte slot, matching the EVM `bytes32` / `uint256` word:
//! - chain id: big-endian integer, left-padded with zeros
//! - local account: canonical address left-padded with zeros, or its
//!   keccak256 digest when the canonical form is wider than 32 bytes

use cosmwasm_std::{Addr, Deps};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode a chain id as a `uint256` word (big-endian, left-padded)
pub fn chain_id_to_bytes32(chain_id: u16) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[30..32].copy_from_slice(&chain_id.to_be_bytes());
    word
}

/// Encode a local address as the 32-byte identity used on the destination chain
///
/// Addresses the API cannot canonicalize are identified by the keccak256 of
/// their string form.
pub fn encode_account(deps: Deps, addr: &Addr) -> [u8; 32] {
    match deps.api.addr_canonicalize(addr.as_str()) {
        Ok(canonical) => pad_or_hash(canonical.as_slice()),
        Err(_) => keccak256(addr.as_bytes()),
    }
}

/// Convert bytes to a 0x-prefixed hex string (for attributes/logging)
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn pad_or_hash(bytes: &[u8]) -> [u8; 32] {
    if bytes.len() > 32 {
        return keccak256(bytes);
    }
    let mut result = [0u8; 32];
    // Left-pad: a 20-byte address lands in positions 12-31
    result[32 - bytes.len()..].copy_from_slice(bytes);
    result
}
