//! Query handlers for the Stream Bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::fee_manager::{query_transport_fee, reconcile, FEE_CONFIG};
use crate::hash::{encode_account, keccak256};
use crate::msg::{
    ConfigResponse, DispatchResponse, DispatchesResponse, EncodeResponse, NonceResponse,
    SimulationResponse, StatsResponse,
};
use crate::payload::{DecodedMessage, Intent};
use crate::state::{DispatchRecord, CONFIG, DISPATCHES, NONCE, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        paused: config.paused,
        target_chain: config.target_chain,
        consistency_level: config.consistency_level,
        transport: config.transport,
        vault: config.vault,
        native_denom: fee_config.native_denom,
        native_decimals: fee_config.native_decimals,
        arbiter_fee: fee_config.arbiter_fee,
    })
}

/// Query bridge statistics.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_dispatched: stats.total_dispatched,
        total_custodied: stats.total_custodied,
        total_dust_refunded: stats.total_dust_refunded,
        total_transport_fees: stats.total_transport_fees,
    })
}

/// Query the nonce of the latest published message.
pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

// ============================================================================
// Dispatch Log
// ============================================================================

fn dispatch_response(record: DispatchRecord) -> DispatchResponse {
    DispatchResponse {
        nonce: record.nonce,
        kind: record.kind,
        tag: record.tag,
        sender: record.sender,
        target_chain: record.target_chain,
        payload: record.payload,
        payload_hash: record.payload_hash,
        transport_fee: record.transport_fee,
        custodied: record.custodied,
        dust: record.dust,
        normalized_amount: record.normalized_amount,
        normalized_arbiter_fee: record.normalized_arbiter_fee,
        sequence: record.sequence,
        dispatched_at: record.dispatched_at,
    }
}

/// Query a single dispatch record.
pub fn query_dispatch(deps: Deps, nonce: u32) -> StdResult<Option<DispatchResponse>> {
    Ok(DISPATCHES
        .may_load(deps.storage, nonce)?
        .map(dispatch_response))
}

/// Query dispatch records in nonce order.
pub fn query_dispatches(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<DispatchesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let dispatches = DISPATCHES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| dispatch_response(record)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DispatchesResponse { dispatches })
}

// ============================================================================
// Simulation & Encoding
// ============================================================================

/// Preview the value split for `attached` at the current transport fee.
pub fn query_simulate_dispatch(deps: Deps, attached: Uint128) -> StdResult<SimulationResponse> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;

    let transport_fee =
        query_transport_fee(&deps.querier, &config.transport, &fee_config.native_denom)
            .map_err(to_std)?;
    let split = reconcile(
        attached,
        transport_fee,
        fee_config.arbiter_fee,
        fee_config.native_decimals,
    )
    .map_err(to_std)?;

    Ok(SimulationResponse {
        attached: split.attached,
        transport_fee: split.transport_fee,
        custodied: split.custodied,
        dust: split.dust,
        normalized_amount: split.normalized_amount,
        normalized_arbiter_fee: split.normalized_arbiter_fee,
    })
}

/// Encode `intent` as if `caller` had sent it.
pub fn query_encode_intent(deps: Deps, caller: String, intent: Intent) -> StdResult<EncodeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let caller = deps.api.addr_validate(&caller)?;

    let payload = intent
        .encode(config.target_chain, &encode_account(deps, &caller))
        .map_err(to_std)?;
    let payload_hash = keccak256(&payload);

    Ok(EncodeResponse {
        tag: intent.tag(),
        payload: Binary::from(payload),
        payload_hash: Binary::from(payload_hash.to_vec()),
    })
}

/// Decode a canonical payload.
pub fn query_decode_payload(payload: Binary) -> StdResult<DecodedMessage> {
    DecodedMessage::decode(payload.as_slice()).map_err(to_std)
}
