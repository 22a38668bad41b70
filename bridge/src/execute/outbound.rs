//! Outbound messenger: fee-tagged, sequence-numbered sends.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::{paid_amount, to_bytes32};
use crate::state::{ACCUMULATED_MESSAGE_FEES, CONFIG, SENT_EVENT_ID};

/// Emit an outbound message for off-chain relaying.
///
/// Assigns a strictly increasing event id, collects the send fee into the
/// accumulated fee ledger and emits the message as event attributes.
pub fn execute_send_message(
    deps: DepsMut,
    info: MessageInfo,
    destination: Binary,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.active {
        return Err(ContractError::BridgeInactive);
    }

    to_bytes32(&destination, "destination")?;

    if payload.len() as u64 > config.max_message_length {
        return Err(ContractError::ExceedsMaxLength {
            length: payload.len() as u64,
            max: config.max_message_length,
        });
    }

    let paid = paid_amount(&info, &config.fee_denom);
    if paid < config.send_message_fee {
        return Err(ContractError::InsufficientFee {
            expected: config.send_message_fee,
            got: paid,
        });
    }

    let event_id = SENT_EVENT_ID.load(deps.storage)?;
    SENT_EVENT_ID.save(deps.storage, &(event_id + 1))?;

    // The full attached value is earmarked for fee withdrawal, not just the
    // configured minimum.
    let accumulated = ACCUMULATED_MESSAGE_FEES.load(deps.storage)?;
    ACCUMULATED_MESSAGE_FEES.save(deps.storage, &(accumulated + paid))?;

    Ok(Response::new()
        .add_attribute("method", "send_message")
        .add_attribute("event_id", event_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("destination", format!("0x{}", hex::encode(destination.as_slice())))
        .add_attribute("payload", format!("0x{}", hex::encode(payload.as_slice())))
        .add_attribute("fee", paid.to_string()))
}
