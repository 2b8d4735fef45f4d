//! Dispatch pipeline shared by every intent.
//!
//! Splits the attached value, assigns the next nonce and emits, in order:
//! the dust refund, the vault deposit and the transport publish. Failures of
//! any of them come back through `reply` as the matching contract error, and
//! the publish reply records the transport sequence. Any failure reverts the
//! whole transaction, so a nonce is only consumed by a message that was
//! actually published.

use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, DepsMut, Env, MessageInfo, Reply, Response, StdError,
    SubMsg, SubMsgResult, WasmMsg,
};

use common::{TransportExecuteMsg, VaultExecuteMsg, SEQUENCE_ATTRIBUTE};

use crate::error::ContractError;
use crate::fee_manager::{attached_value, query_transport_fee, reconcile, FEE_CONFIG};
use crate::hash::{bytes_to_hex, encode_account, keccak256};
use crate::msg::PublishedResponse;
use crate::payload::Intent;
use crate::state::{
    DispatchRecord, CONFIG, DISPATCHES, NONCE, REFUND_REPLY_ID, STATS, VAULT_DEPOSIT_REPLY_ID,
};

/// Publish `intent` on behalf of `info.sender`.
///
/// The returned response carries the outgoing messages and the accounting
/// attributes; callers add their own intent-specific attributes.
pub fn dispatch(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: &Intent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let fee_config = FEE_CONFIG.load(deps.storage)?;

    // Value split
    let attached = attached_value(&info.funds, &fee_config.native_denom)?;
    let transport_fee =
        query_transport_fee(&deps.querier, &config.transport, &fee_config.native_denom)?;
    let split = reconcile(
        attached,
        transport_fee,
        fee_config.arbiter_fee,
        fee_config.native_decimals,
    )?;

    // Payload
    let caller = encode_account(deps.as_ref(), &info.sender);
    let payload = intent.encode(config.target_chain, &caller)?;
    let payload_hash = keccak256(&payload);

    // Nonce is consumed only once everything above succeeded
    let nonce = NONCE
        .load(deps.storage)?
        .checked_add(1)
        .ok_or(ContractError::NonceOverflow)?;
    NONCE.save(deps.storage, &nonce)?;

    let record = DispatchRecord {
        nonce,
        kind: intent.kind().to_string(),
        tag: intent.tag(),
        sender: info.sender.clone(),
        target_chain: config.target_chain,
        payload: Binary::from(payload.clone()),
        payload_hash: Binary::from(payload_hash.to_vec()),
        transport_fee: split.transport_fee,
        custodied: split.custodied,
        dust: split.dust,
        normalized_amount: split.normalized_amount,
        normalized_arbiter_fee: split.normalized_arbiter_fee,
        sequence: None,
        dispatched_at: env.block.time,
    };
    DISPATCHES.save(deps.storage, nonce, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_dispatched += 1;
    stats.total_custodied += split.custodied;
    stats.total_dust_refunded += split.dust;
    stats.total_transport_fees += split.transport_fee;
    STATS.save(deps.storage, &stats)?;

    let denom = fee_config.native_denom;
    let mut response = Response::new();

    // Dust refund
    if !split.dust.is_zero() {
        let refund = BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: denom.clone(),
                amount: split.dust,
            }],
        };
        response = response.add_submessage(SubMsg::reply_on_error(refund, REFUND_REPLY_ID));
    }

    // Custody
    if !split.custodied.is_zero() {
        let deposit = WasmMsg::Execute {
            contract_addr: config.vault.to_string(),
            msg: to_json_binary(&VaultExecuteMsg::Deposit {})?,
            funds: vec![Coin {
                denom: denom.clone(),
                amount: split.custodied,
            }],
        };
        response =
            response.add_submessage(SubMsg::reply_on_error(deposit, VAULT_DEPOSIT_REPLY_ID));
    }

    // Publish
    let publish_funds = if split.transport_fee.is_zero() {
        vec![]
    } else {
        vec![Coin {
            denom,
            amount: split.transport_fee,
        }]
    };
    let publish = WasmMsg::Execute {
        contract_addr: config.transport.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::PostMessage {
            nonce,
            message: Binary::from(payload),
            consistency_level: config.consistency_level,
        })?,
        funds: publish_funds,
    };

    Ok(response
        .add_submessage(SubMsg::reply_always(publish, u64::from(nonce)))
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("tag", intent.tag().to_string())
        .add_attribute("target_chain", config.target_chain.to_string())
        .add_attribute("payload_hash", bytes_to_hex(&payload_hash))
        .add_attribute("transport_fee", split.transport_fee)
        .add_attribute("custodied", split.custodied)
        .add_attribute("dust", split.dust)
        .add_attribute("normalized_amount", split.normalized_amount)
        .add_attribute("arbiter_fee", split.normalized_arbiter_fee))
}

/// Record the transport sequence of a published message.
///
/// The reply id is the message nonce.
pub fn handle_publish_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let nonce = u32::try_from(msg.id)
        .map_err(|_| StdError::generic_err(format!("unknown reply id {}", msg.id)))?;

    let result = msg
        .result
        .into_result()
        .map_err(|reason| ContractError::TransportPublishFailed { reason })?;

    let sequence = result
        .events
        .iter()
        .filter(|event| event.ty == "wasm")
        .flat_map(|event| &event.attributes)
        .find(|attr| attr.key == SEQUENCE_ATTRIBUTE)
        .ok_or(ContractError::TransportPublishFailed {
            reason: "transport did not report a sequence".to_string(),
        })?
        .value
        .parse::<u64>()
        .map_err(|e| ContractError::TransportPublishFailed {
            reason: format!("invalid sequence: {}", e),
        })?;

    DISPATCHES.update(deps.storage, nonce, |record| match record {
        Some(mut record) => {
            record.sequence = Some(sequence);
            Ok(record)
        }
        None => Err(StdError::not_found(format!("dispatch {}", nonce))),
    })?;

    Ok(Response::new()
        .set_data(to_json_binary(&PublishedResponse { nonce, sequence })?)
        .add_attribute("method", "publish_reply")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sequence", sequence.to_string()))
}

/// Turn a failed custody sub-message into the matching contract error.
pub fn handle_custody_reply(msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };

    Err(match msg.id {
        REFUND_REPLY_ID => ContractError::RefundTransferFailed { reason },
        VAULT_DEPOSIT_REPLY_ID => ContractError::VaultDepositFailed { reason },
        _ => ContractError::VaultWithdrawFailed { reason },
    })
}
