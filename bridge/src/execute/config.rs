//! Configuration management handlers.
//!
//! This module handles:
//! - Destination chain id
//! - Arbiter fee
//! - Transport consistency level

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::fee_manager::FEE_CONFIG;
use crate::state::CONFIG;

// ============================================================================
// Destination
// ============================================================================

/// Change the destination chain id written into every payload.
pub fn execute_set_target_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    if chain_id == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "target chain cannot be 0".to_string(),
        });
    }

    let old_chain = config.target_chain;
    config.target_chain = chain_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_target_chain")
        .add_attribute("old_target_chain", old_chain.to_string())
        .add_attribute("new_target_chain", chain_id.to_string()))
}

/// Change the transport consistency level.
pub fn execute_set_consistency_level(
    deps: DepsMut,
    info: MessageInfo,
    consistency_level: u8,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let old_level = config.consistency_level;
    config.consistency_level = consistency_level;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_consistency_level")
        .add_attribute("old_consistency_level", old_level.to_string())
        .add_attribute("new_consistency_level", consistency_level.to_string()))
}

// ============================================================================
// Fees
// ============================================================================

/// Change the flat arbiter fee.
pub fn execute_set_arbiter_fee(
    deps: DepsMut,
    info: MessageInfo,
    arbiter_fee: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let mut fee_config = FEE_CONFIG.load(deps.storage)?;
    let old_fee = fee_config.arbiter_fee;
    fee_config.arbiter_fee = arbiter_fee;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    Ok(Response::new()
        .add_attribute("method", "set_arbiter_fee")
        .add_attribute("old_arbiter_fee", old_fee)
        .add_attribute("new_arbiter_fee", arbiter_fee))
}
