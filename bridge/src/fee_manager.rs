//! Fee Manager Module
//!
//! Splits the native value attached to a dispatch between the parties that
//! are owed a share of it.
//!
//! ## Value Split
//!
//! | Share           | Destination                         |
//! |-----------------|-------------------------------------|
//! | Transport fee   | Paid to the transport with publish  |
//! | Custodied value | Deposited into the wrapped vault    |
//! | Dust            | Refunded to the caller              |
//!
//! `attached = transport_fee + custodied + dust` holds for every successful
//! dispatch. The arbiter fee is an accounting figure carried to the
//! destination; it is never transferred here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, QuerierWrapper, StdError, StdResult, Uint128};
use cw_storage_plus::Item;

use common::{MessageFeeResponse, TransportQueryMsg};

use crate::amount::{self, normalize, MAX_NATIVE_DECIMALS};
use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Default native denom (Terra Classic)
pub const DEFAULT_NATIVE_DENOM: &str = "uluna";

/// Default native precision
pub const DEFAULT_NATIVE_DECIMALS: u8 = 6;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee configuration parameters
#[cw_serde]
pub struct FeeConfig {
    /// Flat fee owed to the destination arbiter, in native units
    pub arbiter_fee: Uint128,
    /// Denom accepted as attached value
    pub native_denom: String,
    /// Decimal precision of `native_denom`
    pub native_decimals: u8,
}

impl FeeConfig {
    pub fn new(arbiter_fee: Uint128, native_denom: String, native_decimals: u8) -> Self {
        Self {
            arbiter_fee,
            native_denom,
            native_decimals,
        }
    }

    /// Validate the fee configuration
    pub fn validate(&self) -> StdResult<()> {
        if self.native_denom.is_empty() {
            return Err(StdError::generic_err("Native denom cannot be empty"));
        }
        if self.native_decimals > MAX_NATIVE_DECIMALS {
            return Err(StdError::generic_err(format!(
                "Native decimals {} exceeds max {}",
                self.native_decimals, MAX_NATIVE_DECIMALS
            )));
        }
        Ok(())
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::new(
            Uint128::zero(),
            DEFAULT_NATIVE_DENOM.to_string(),
            DEFAULT_NATIVE_DECIMALS,
        )
    }
}

/// Outcome of splitting attached value
#[cw_serde]
pub struct Reconciliation {
    pub attached: Uint128,
    pub transport_fee: Uint128,
    /// Attached value left after the transport fee
    pub amount: Uint128,
    pub normalized_amount: Uint128,
    pub normalized_arbiter_fee: Uint128,
    /// Sub-precision remainder handed back to the caller
    pub dust: Uint128,
    /// Value moved into the vault
    pub custodied: Uint128,
}

// ============================================================================
// Storage
// ============================================================================

/// Fee configuration storage
pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

// ============================================================================
// Reconciliation
// ============================================================================

/// Split `attached` into transport fee, custodied value and dust.
///
/// Fails when the attached value does not strictly exceed the transport fee,
/// or when the arbiter fee is larger than what is left after it.
pub fn reconcile(
    attached: Uint128,
    transport_fee: Uint128,
    arbiter_fee: Uint128,
    decimals: u8,
) -> Result<Reconciliation, ContractError> {
    if transport_fee >= attached {
        return Err(ContractError::InsufficientValue {
            attached,
            fee: transport_fee,
        });
    }
    let amount = attached - transport_fee;

    if arbiter_fee > amount {
        return Err(ContractError::ArbiterFeeExceedsAmount {
            arbiter_fee,
            amount,
        });
    }

    let normalized_amount = normalize(amount, decimals);
    let normalized_arbiter_fee = normalize(arbiter_fee, decimals);

    let dust = amount::dust(amount, decimals)?;
    let custodied = amount - dust;

    Ok(Reconciliation {
        attached,
        transport_fee,
        amount,
        normalized_amount,
        normalized_arbiter_fee,
        dust,
        custodied,
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Sum the attached native value, rejecting any other denom.
pub fn attached_value(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    match funds {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == denom => Ok(coin.amount),
        [coin] => Err(ContractError::InvalidFunds {
            reason: format!("expected {}, got {}", denom, coin.denom),
        }),
        _ => Err(ContractError::InvalidFunds {
            reason: format!("only {} may be attached", denom),
        }),
    }
}

/// Query the transport's current message fee in the native denom.
pub fn query_transport_fee(
    querier: &QuerierWrapper,
    transport: &Addr,
    denom: &str,
) -> Result<Uint128, ContractError> {
    let response: MessageFeeResponse =
        querier.query_wasm_smart(transport, &TransportQueryMsg::MessageFee {})?;

    if response.fee.amount.is_zero() {
        return Ok(Uint128::zero());
    }
    if response.fee.denom != denom {
        return Err(ContractError::InvalidFunds {
            reason: format!(
                "transport fee is denominated in {}, bridge accepts {}",
                response.fee.denom, denom
            ),
        });
    }
    Ok(response.fee.amount)
}
