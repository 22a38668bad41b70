//! Inbound message verification and dispatch.
//!
//! `receive_message` runs the full acceptance algorithm: fee and payload
//! preconditions, epoch bounds, replay guard, claimed-list digest binding,
//! per-slot signature recovery against the threshold, then proof TTL. On
//! acceptance the event id is recorded *before* any outgoing sub-message is
//! constructed, so re-entrant calls observe the updated guard state.
//!
//! Messages addressed to the bridge contract itself are validator-set
//! rotations; everything else is dispatched to the destination contract
//! through the [`BridgeReceiveMsg`] callback.

use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};

use crate::error::ContractError;
use crate::execute::{paid_amount, to_bytes32};
use crate::hash::{
    bytes32_to_hex, decode_rotation_payload, encode_local_address, signing_digest,
    validator_set_digest,
};
use crate::msg::{BridgeReceiveMsg, InboundProof};
use crate::state::{
    Config, ACCUMULATED_MESSAGE_FEES, ACTIVE_EPOCH_ID, CONFIG, VALIDATOR_DIGESTS,
    VERIFIED_EVENT_IDS,
};
use crate::verify::{count_matching_signatures, required_signatures};

/// Deliver an inbound message with its proof of validator approval.
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source: Binary,
    destination: String,
    payload: Binary,
    proof: InboundProof,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Fee and payload preconditions come before any verification work.
    let paid = paid_amount(&info, &config.fee_denom);
    if paid < config.bridge_fee {
        return Err(ContractError::MustSupplyFee {
            expected: config.bridge_fee,
            got: paid,
        });
    }
    if payload.is_empty() {
        return Err(ContractError::EmptyMessage);
    }

    if !config.active {
        return Err(ContractError::BridgeInactive);
    }

    let active_epoch_id = ACTIVE_EPOCH_ID.load(deps.storage)?;
    if proof.epoch_id > active_epoch_id {
        return Err(ContractError::FutureValidatorSet {
            epoch_id: proof.epoch_id,
            active_epoch_id,
        });
    }

    if VERIFIED_EVENT_IDS.has(deps.storage, proof.event_id) {
        return Err(ContractError::EventReplayed {
            event_id: proof.event_id,
        });
    }

    if proof.validators.is_empty() {
        return Err(ContractError::InvalidValidatorSet);
    }

    // The claimed list must be exactly the list registered for that epoch,
    // not a subset or superset.
    let claimed_digest = validator_set_digest(&proof.validators);
    let stored_digest = VALIDATOR_DIGESTS.may_load(deps.storage, proof.epoch_id)?;
    if stored_digest != Some(claimed_digest) {
        return Err(ContractError::UnexpectedValidatorDigest {
            epoch_id: proof.epoch_id,
        });
    }

    if proof.signatures.len() != proof.validators.len() {
        return Err(ContractError::SignatureCountMismatch {
            signatures: proof.signatures.len(),
            validators: proof.validators.len(),
        });
    }

    let source_bytes = to_bytes32(&source, "source")?;
    let destination_addr = deps.api.addr_validate(&destination)?;
    let destination_bytes = encode_local_address(deps.as_ref(), &destination_addr)?;

    let digest = signing_digest(
        &source_bytes,
        &destination_bytes,
        payload.as_slice(),
        proof.epoch_id,
        proof.event_id,
    );

    let required = required_signatures(proof.validators.len(), config.threshold_percent);
    let matched =
        count_matching_signatures(deps.api, &digest, &proof.signatures, &proof.validators);
    if matched < required {
        return Err(ContractError::NotEnoughSignatures {
            got: matched,
            required,
        });
    }

    // Proof expiry is evaluated after signature counting.
    let distance = active_epoch_id - proof.epoch_id;
    if distance > config.proof_ttl {
        return Err(ContractError::ExpiredProof {
            epoch_id: proof.epoch_id,
            distance,
            proof_ttl: config.proof_ttl,
        });
    }

    // Replay guard first; everything after this may reach external code.
    VERIFIED_EVENT_IDS.save(deps.storage, proof.event_id, &true)?;

    let response = Response::new()
        .add_attribute("method", "receive_message")
        .add_attribute("event_id", proof.event_id.to_string())
        .add_attribute("source", format!("0x{}", hex::encode(source.as_slice())))
        .add_attribute("destination", destination_addr.to_string())
        .add_attribute("matched_signatures", matched.to_string());

    if destination_addr == env.contract.address {
        rotate_via_message(deps, env, info, &config, active_epoch_id, &payload, response)
    } else {
        // Application message: hand off to the peg adapter boundary.
        let callback = WasmMsg::Execute {
            contract_addr: destination_addr.to_string(),
            msg: to_json_binary(&BridgeReceiveMsg::ReceiveBridgeMessage {
                source,
                payload,
                event_id: proof.event_id,
            })?,
            funds: vec![],
        };
        Ok(response.add_message(callback))
    }
}

/// Rotate the validator set from a verified inbound payload and pay the
/// relayer a bounded reward.
fn rotate_via_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    config: &Config,
    active_epoch_id: u64,
    payload: &Binary,
    response: Response,
) -> Result<Response, ContractError> {
    let (validators, new_epoch_id) = decode_rotation_payload(payload.as_slice())
        .ok_or(ContractError::InvalidRotationPayload)?;

    if validators.is_empty() {
        return Err(ContractError::EmptyValidatorSet);
    }

    // Only exact equality is rejected here. A lower id passes and becomes
    // active; the forced paths are the ones that enforce monotonicity.
    if new_epoch_id == active_epoch_id {
        return Err(ContractError::EpochReplayed {
            epoch_id: new_epoch_id,
        });
    }

    let digest = validator_set_digest(&validators);
    VALIDATOR_DIGESTS.save(deps.storage, new_epoch_id, &digest)?;
    ACTIVE_EPOCH_ID.save(deps.storage, &new_epoch_id)?;

    // Reward pool excludes fees earmarked for withdrawal, so a rotation can
    // never drain the accumulated message fees.
    let balance = deps
        .querier
        .query_balance(env.contract.address, &config.fee_denom)?;
    let accumulated = ACCUMULATED_MESSAGE_FEES.load(deps.storage)?;
    let reward = balance
        .amount
        .saturating_sub(accumulated)
        .min(config.max_reward_payout);

    let mut response = response
        .add_attribute("set_digest", bytes32_to_hex(&digest))
        .add_attribute("new_epoch_id", new_epoch_id.to_string())
        .add_attribute("reward", reward.to_string());

    if reward > Uint128::zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: reward,
            }],
        }));
    }

    Ok(response)
}
