//! Amount normalization between native precision and the 8-decimal wire precision.
//!
//! Cross-chain amounts are carried with 8 decimals. A native amount with more
//! decimals is truncated on the way out; the truncated remainder ("dust") is
//! never bridged and must be handed back by the caller of these routines.

use cosmwasm_std::{StdResult, Uint128};

/// Decimal precision of amounts carried on the wire
pub const WIRE_DECIMALS: u8 = 8;

/// Highest native precision accepted by the bridge
pub const MAX_NATIVE_DECIMALS: u8 = 18;

/// `10^(decimals - 8)` for precisions above the wire precision, 1 otherwise.
pub fn scale(decimals: u8) -> Uint128 {
    if decimals > WIRE_DECIMALS {
        Uint128::from(10u128.pow((decimals - WIRE_DECIMALS) as u32))
    } else {
        Uint128::one()
    }
}

/// Truncate a native amount to wire precision.
pub fn normalize(amount: Uint128, decimals: u8) -> Uint128 {
    if decimals > WIRE_DECIMALS {
        amount / scale(decimals)
    } else {
        amount
    }
}

/// Scale a wire-precision amount back to native precision.
///
/// Exact inverse of [`normalize`] only when nothing was truncated.
pub fn denormalize(normalized: Uint128, decimals: u8) -> StdResult<Uint128> {
    if decimals > WIRE_DECIMALS {
        Ok(normalized.checked_mul(scale(decimals))?)
    } else {
        Ok(normalized)
    }
}

/// Remainder lost when `amount` is normalized, i.e. `amount mod 10^(decimals-8)`.
pub fn dust(amount: Uint128, decimals: u8) -> StdResult<Uint128> {
    let kept = denormalize(normalize(amount, decimals), decimals)?;
    Ok(amount.checked_sub(kept)?)
}
