//! Wrapped-native vault interface.
//!
//! The vault wraps native currency 1:1 into a CW20 balance. Balances are
//! read through the standard CW20 query interface.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Execute messages understood by the vault contract
#[cw_serde]
pub enum VaultExecuteMsg {
    /// Wrap the attached native coins and credit them to the sender
    Deposit {},
    /// Burn `amount` of the sender's wrapped balance and release the native coins
    Withdraw { amount: Uint128 },
}

/// The vault answers the CW20 query set (`Balance { address }` in particular).
pub type VaultQueryMsg = cw20::Cw20QueryMsg;
