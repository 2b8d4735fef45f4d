//! Intent handlers.
//!
//! Every stream intent goes through [`execute_intent`]: pause check, field
//! validation, dispatch, then the intent's own attributes.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::dispatch::dispatch;
use crate::hash::{bytes_to_hex, encode_account};
use crate::payload::Intent;
use crate::state::CONFIG;

/// Execute handler for all stream intents
pub fn execute_intent(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: Intent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    intent.validate()?;

    let caller = encode_account(deps.as_ref(), &info.sender);
    let sender = info.sender.to_string();
    let response = dispatch(deps, env, info, &intent)?;

    let mut response = response
        .add_attribute("method", intent.kind())
        .add_attribute("sender", sender)
        .add_attribute(intent.caller_role(), bytes_to_hex(&caller));

    for (field, value) in intent.accounts() {
        response = response.add_attribute(field, bytes_to_hex(value.as_slice()));
    }
    if let Some(amount) = intent.amount() {
        response = response.add_attribute("amount", amount.to_string());
    }
    if let Intent::StreamCreate {
        start_time,
        end_time,
        can_update,
        can_cancel,
        ..
    } = &intent
    {
        response = response
            .add_attribute("start_time", start_time.to_string())
            .add_attribute("end_time", end_time.to_string())
            .add_attribute("can_update", can_update.to_string())
            .add_attribute("can_cancel", can_cancel.to_string());
    }
    if let Intent::StreamUpdate {
        start_time,
        end_time,
        ..
    } = &intent
    {
        response = response
            .add_attribute("start_time", start_time.to_string())
            .add_attribute("end_time", end_time.to_string());
    }

    Ok(response)
}
