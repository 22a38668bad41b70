//! Message bridge contract - entry points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_force_active_set,
    execute_force_historic_set, execute_propose_admin, execute_receive_message,
    execute_send_message, execute_set_active, execute_set_bridge_fee,
    execute_set_max_message_length, execute_set_max_reward_payout, execute_set_proof_ttl,
    execute_set_send_message_fee, execute_set_threshold, execute_withdraw_all,
    execute_withdraw_message_fees,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_accumulated_message_fees, query_active_validator_set_id, query_compute_set_digest,
    query_config, query_is_event_verified, query_pending_admin, query_sent_event_id,
    query_signing_digest, query_validator_set_digest,
};
use crate::state::{
    Config, ACCUMULATED_MESSAGE_FEES, ACTIVE_EPOCH_ID, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    SENT_EVENT_ID,
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

    let admin = deps.api.addr_validate(&msg.admin)?;

    if msg.threshold_percent == 0 || msg.threshold_percent > 100 {
        return Err(ContractError::InvalidThreshold {
            percent: msg.threshold_percent,
        });
    }

    // The bridge starts inactive; bootstrap is ForceActiveValidatorSet
    // followed by SetActive.
    let config = Config {
        admin,
        active: false,
        fee_denom: msg.fee_denom,
        threshold_percent: msg.threshold_percent,
        proof_ttl: msg.proof_ttl,
        max_message_length: msg.max_message_length,
        send_message_fee: msg.send_message_fee,
        bridge_fee: msg.bridge_fee,
        max_reward_payout: msg.max_reward_payout,
    };
    CONFIG.save(deps.storage, &config)?;

    ACTIVE_EPOCH_ID.save(deps.storage, &0u64)?;
    SENT_EVENT_ID.save(deps.storage, &0u64)?;
    ACCUMULATED_MESSAGE_FEES.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("threshold_percent", config.threshold_percent.to_string())
        .add_attribute("proof_ttl", config.proof_ttl.to_string()))
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
        // Messaging
        ExecuteMsg::SendMessage {
            destination,
            payload,
        } => execute_send_message(deps, info, destination, payload),
        ExecuteMsg::ReceiveMessage {
            source,
            destination,
            payload,
            proof,
        } => execute_receive_message(deps, env, info, source, destination, payload, proof),

        // Validator set management
        ExecuteMsg::ForceActiveValidatorSet {
            validators,
            epoch_id,
        } => execute_force_active_set(deps, info, validators, epoch_id),
        ExecuteMsg::ForceHistoricValidatorSet {
            validators,
            epoch_id,
        } => execute_force_historic_set(deps, info, validators, epoch_id),

        // Configuration
        ExecuteMsg::SetThreshold { percent } => execute_set_threshold(deps, info, percent),
        ExecuteMsg::SetProofTtl { epochs } => execute_set_proof_ttl(deps, info, epochs),
        ExecuteMsg::SetMaxMessageLength { length } => {
            execute_set_max_message_length(deps, info, length)
        }
        ExecuteMsg::SetSendMessageFee { amount } => {
            execute_set_send_message_fee(deps, info, amount)
        }
        ExecuteMsg::SetBridgeFee { amount } => execute_set_bridge_fee(deps, info, amount),
        ExecuteMsg::SetMaxRewardPayout { amount } => {
            execute_set_max_reward_payout(deps, info, amount)
        }
        ExecuteMsg::SetActive { active } => execute_set_active(deps, info, active),

        // Fee ledger
        ExecuteMsg::WithdrawMessageFees {
            destination,
            amount,
        } => execute_withdraw_message_fees(deps, info, destination, amount),
        ExecuteMsg::WithdrawAll { destination } => {
            execute_withdraw_all(deps, env, info, destination)
        }

        // Admin transfer
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ActiveValidatorSetId {} => to_json_binary(&query_active_validator_set_id(deps)?),
        QueryMsg::ValidatorSetDigest { epoch_id } => {
            to_json_binary(&query_validator_set_digest(deps, epoch_id)?)
        }
        QueryMsg::IsEventVerified { event_id } => {
            to_json_binary(&query_is_event_verified(deps, event_id)?)
        }
        QueryMsg::SentEventId {} => to_json_binary(&query_sent_event_id(deps)?),
        QueryMsg::AccumulatedMessageFees {} => {
            to_json_binary(&query_accumulated_message_fees(deps)?)
        }
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
        QueryMsg::ComputeSetDigest { validators } => {
            to_json_binary(&query_compute_set_digest(validators)?)
        }
        QueryMsg::SigningDigest {
            source,
            destination,
            payload,
            epoch_id,
            event_id,
        } => to_json_binary(&query_signing_digest(
            deps,
            source,
            destination,
            payload,
            epoch_id,
            event_id,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
