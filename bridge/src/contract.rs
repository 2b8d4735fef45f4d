//! Stream Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_claim_native, execute_claim_wrapped, execute_intent, execute_pause,
    execute_set_arbiter_fee, execute_set_consistency_level, execute_set_target_chain,
    execute_unpause, execute_update_admin, handle_custody_reply, handle_publish_reply,
};
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::payload::Intent;
use crate::query::{
    query_config, query_current_nonce, query_decode_payload, query_dispatch, query_dispatches,
    query_encode_intent, query_simulate_dispatch, query_stats,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_CONSISTENCY_LEVEL,
    DEFAULT_TARGET_CHAIN, NONCE, REFUND_REPLY_ID, STATS, VAULT_DEPOSIT_REPLY_ID,
    VAULT_WITHDRAW_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Validate addresses
    let admin = deps.api.addr_validate(&msg.admin)?;
    let transport = deps.api.addr_validate(&msg.transport)?;
    let vault = deps.api.addr_validate(&msg.vault)?;

    let target_chain = msg.target_chain.unwrap_or(DEFAULT_TARGET_CHAIN);
    if target_chain == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "target chain cannot be 0".to_string(),
        });
    }

    // Fee config
    let fee_config = FeeConfig::new(msg.arbiter_fee, msg.native_denom, msg.native_decimals);
    fee_config
        .validate()
        .map_err(|e| ContractError::InvalidConfig {
            reason: e.to_string(),
        })?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;

    // Store config
    let config = Config {
        admin,
        paused: false,
        target_chain,
        consistency_level: msg.consistency_level.unwrap_or(DEFAULT_CONSISTENCY_LEVEL),
        transport,
        vault,
    };
    CONFIG.save(deps.storage, &config)?;

    STATS.save(deps.storage, &Stats::default())?;
    NONCE.save(deps.storage, &0u32)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("transport", config.transport)
        .add_attribute("vault", config.vault)
        .add_attribute("target_chain", config.target_chain.to_string())
        .add_attribute("native_denom", fee_config.native_denom)
        .add_attribute("native_decimals", fee_config.native_decimals.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Admin Operations
        ExecuteMsg::SetTargetChain { chain_id } => execute_set_target_chain(deps, info, chain_id),
        ExecuteMsg::SetArbiterFee { arbiter_fee } => {
            execute_set_arbiter_fee(deps, info, arbiter_fee)
        }
        ExecuteMsg::SetConsistencyLevel { consistency_level } => {
            execute_set_consistency_level(deps, info, consistency_level)
        }
        ExecuteMsg::UpdateAdmin { new_admin } => execute_update_admin(deps, info, new_admin),
        ExecuteMsg::ClaimNative {} => execute_claim_native(deps, env, info),
        ExecuteMsg::ClaimWrapped {} => execute_claim_wrapped(deps, env, info),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),

        // Stream Intents
        intent => execute_intent(deps, env, info, Intent::try_from(intent)?),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REFUND_REPLY_ID | VAULT_DEPOSIT_REPLY_ID | VAULT_WITHDRAW_REPLY_ID => {
            handle_custody_reply(msg)
        }
        // Everything else is a publish, keyed by nonce
        _ => handle_publish_reply(deps, msg),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::Dispatch { nonce } => to_json_binary(&query_dispatch(deps, nonce)?),
        QueryMsg::Dispatches { start_after, limit } => {
            to_json_binary(&query_dispatches(deps, start_after, limit)?)
        }
        QueryMsg::SimulateDispatch { attached } => {
            to_json_binary(&query_simulate_dispatch(deps, attached)?)
        }
        QueryMsg::EncodeIntent { caller, intent } => {
            to_json_binary(&query_encode_intent(deps, caller, intent)?)
        }
        QueryMsg::DecodePayload { payload } => to_json_binary(&query_decode_payload(payload)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
