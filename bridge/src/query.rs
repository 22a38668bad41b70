//! Query handlers for the message bridge contract.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::hash::{encode_local_address, signing_digest, validator_set_digest};
use crate::msg::{
    AccumulatedMessageFeesResponse, ActiveValidatorSetIdResponse, ConfigResponse, DigestResponse,
    EventVerifiedResponse, PendingAdminResponse, SentEventIdResponse, ValidatorSetDigestResponse,
};
use crate::state::{
    ACCUMULATED_MESSAGE_FEES, ACTIVE_EPOCH_ID, CONFIG, PENDING_ADMIN, SENT_EVENT_ID,
    VALIDATOR_DIGESTS, VERIFIED_EVENT_IDS,
};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        active: config.active,
        fee_denom: config.fee_denom,
        threshold_percent: config.threshold_percent,
        proof_ttl: config.proof_ttl,
        max_message_length: config.max_message_length,
        send_message_fee: config.send_message_fee,
        bridge_fee: config.bridge_fee,
        max_reward_payout: config.max_reward_payout,
    })
}

/// Query the active validator-set epoch id.
pub fn query_active_validator_set_id(deps: Deps) -> StdResult<ActiveValidatorSetIdResponse> {
    let epoch_id = ACTIVE_EPOCH_ID.load(deps.storage)?;
    Ok(ActiveValidatorSetIdResponse { epoch_id })
}

/// Query the stored validator-set digest for an epoch.
pub fn query_validator_set_digest(
    deps: Deps,
    epoch_id: u64,
) -> StdResult<ValidatorSetDigestResponse> {
    let digest = VALIDATOR_DIGESTS.may_load(deps.storage, epoch_id)?;
    Ok(ValidatorSetDigestResponse {
        epoch_id,
        digest: digest.map(|d| Binary::from(d.to_vec())),
    })
}

/// Query whether an inbound event id has been verified.
pub fn query_is_event_verified(deps: Deps, event_id: u64) -> StdResult<EventVerifiedResponse> {
    Ok(EventVerifiedResponse {
        event_id,
        verified: VERIFIED_EVENT_IDS.has(deps.storage, event_id),
    })
}

/// Query the next outbound event id.
pub fn query_sent_event_id(deps: Deps) -> StdResult<SentEventIdResponse> {
    let event_id = SENT_EVENT_ID.load(deps.storage)?;
    Ok(SentEventIdResponse { event_id })
}

/// Query the accumulated outbound message fees.
pub fn query_accumulated_message_fees(deps: Deps) -> StdResult<AccumulatedMessageFeesResponse> {
    let amount = ACCUMULATED_MESSAGE_FEES.load(deps.storage)?;
    Ok(AccumulatedMessageFeesResponse { amount })
}

/// Query the pending admin proposal.
pub fn query_pending_admin(deps: Deps) -> StdResult<PendingAdminResponse> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(PendingAdminResponse {
        new_admin: pending.as_ref().map(|p| p.new_address.clone()),
        execute_after: pending.map(|p| p.execute_after),
    })
}

/// Compute the digest of a validator address list.
pub fn query_compute_set_digest(validators: Vec<Binary>) -> StdResult<DigestResponse> {
    let digest = validator_set_digest(&validators);
    Ok(DigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}

/// Compute the exact signing digest the contract verifies for a message.
pub fn query_signing_digest(
    deps: Deps,
    source: Binary,
    destination: String,
    payload: Binary,
    epoch_id: u64,
    event_id: u64,
) -> StdResult<DigestResponse> {
    let source_bytes: [u8; 32] = source
        .as_slice()
        .try_into()
        .map_err(|_| cosmwasm_std::StdError::generic_err("source must be exactly 32 bytes"))?;

    let destination_addr = deps.api.addr_validate(&destination)?;
    let destination_bytes = encode_local_address(deps, &destination_addr)?;

    let digest = signing_digest(
        &source_bytes,
        &destination_bytes,
        payload.as_slice(),
        epoch_id,
        event_id,
    );
    Ok(DigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}
