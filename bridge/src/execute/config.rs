//! Configuration setters (admin only).
//!
//! Each setter updates one field of the config record and leaves an
//! attribute trail.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::ensure_admin;
use crate::state::CONFIG;

pub fn execute_set_threshold(
    deps: DepsMut,
    info: MessageInfo,
    percent: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    if percent == 0 || percent > 100 {
        return Err(ContractError::InvalidThreshold { percent });
    }

    config.threshold_percent = percent;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_threshold")
        .add_attribute("percent", percent.to_string()))
}

pub fn execute_set_proof_ttl(
    deps: DepsMut,
    info: MessageInfo,
    epochs: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.proof_ttl = epochs;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_proof_ttl")
        .add_attribute("epochs", epochs.to_string()))
}

pub fn execute_set_max_message_length(
    deps: DepsMut,
    info: MessageInfo,
    length: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.max_message_length = length;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_message_length")
        .add_attribute("length", length.to_string()))
}

pub fn execute_set_send_message_fee(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.send_message_fee = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_send_message_fee")
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_set_bridge_fee(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.bridge_fee = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_bridge_fee")
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_set_max_reward_payout(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.max_reward_payout = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_reward_payout")
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_set_active(
    deps: DepsMut,
    info: MessageInfo,
    active: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    config.active = active;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_active")
        .add_attribute("active", active.to_string()))
}
