//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause contract
//! - Admin transfer
//! - Claiming native and wrapped balances held by the bridge

use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, DepsMut, Env, MessageInfo, Response, SubMsg, WasmMsg,
};

use common::{VaultExecuteMsg, VaultQueryMsg};

use crate::error::ContractError;
use crate::fee_manager::FEE_CONFIG;
use crate::state::{CONFIG, VAULT_WITHDRAW_REPLY_ID};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops all intents).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the contract (resumes intents).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Replace the admin.
pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let old_admin = std::mem::replace(&mut config.admin, new_admin_addr);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_admin")
        .add_attribute("old_admin", old_admin)
        .add_attribute("new_admin", config.admin))
}

// ============================================================================
// Claims
// ============================================================================

/// Send the bridge's entire native balance to the admin.
pub fn execute_claim_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let denom = FEE_CONFIG.load(deps.storage)?.native_denom;
    let balance = deps.querier.query_balance(&env.contract.address, &denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToClaim);
    }

    let amount = balance.amount;
    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: vec![balance],
        })
        .add_attribute("method", "claim_native")
        .add_attribute("recipient", config.admin)
        .add_attribute("amount", amount))
}

/// Redeem the bridge's entire vault balance and send it to the admin.
pub fn execute_claim_wrapped(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let denom = FEE_CONFIG.load(deps.storage)?.native_denom;
    let balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        &config.vault,
        &VaultQueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if balance.balance.is_zero() {
        return Err(ContractError::NothingToClaim);
    }

    let amount = balance.balance;
    let withdraw = WasmMsg::Execute {
        contract_addr: config.vault.to_string(),
        msg: to_json_binary(&VaultExecuteMsg::Withdraw { amount })?,
        funds: vec![],
    };
    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(withdraw, VAULT_WITHDRAW_REPLY_ID))
        .add_message(BankMsg::Send {
            to_address: config.admin.to_string(),
            amount: vec![Coin { denom, amount }],
        })
        .add_attribute("method", "claim_wrapped")
        .add_attribute("recipient", config.admin)
        .add_attribute("amount", amount))
}
