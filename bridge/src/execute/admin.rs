//! Admin operations handlers.
//!
//! This module handles:
//! - Fee ledger withdrawals (earmarked fees and full-balance sweep)
//! - Admin transfer (propose/accept/cancel)

use cosmwasm_std::{BankMsg, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::ensure_admin;
use crate::state::{
    PendingAdmin, ACCUMULATED_MESSAGE_FEES, ADMIN_TIMELOCK_DURATION, CONFIG, PENDING_ADMIN,
};

// ============================================================================
// Fee Ledger
// ============================================================================

/// Withdraw accumulated outbound message fees.
pub fn execute_withdraw_message_fees(
    deps: DepsMut,
    info: MessageInfo,
    destination: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    let destination_addr = deps.api.addr_validate(&destination)?;

    let accumulated = ACCUMULATED_MESSAGE_FEES.load(deps.storage)?;
    if amount > accumulated {
        return Err(ContractError::WithdrawAmountTooHigh {
            requested: amount,
            available: accumulated,
        });
    }

    ACCUMULATED_MESSAGE_FEES.save(deps.storage, &(accumulated - amount))?;

    Ok(Response::new()
        .add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: destination_addr.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom,
                amount,
            }],
        }))
        .add_attribute("method", "withdraw_message_fees")
        .add_attribute("destination", destination_addr)
        .add_attribute("amount", amount.to_string()))
}

/// Sweep the entire contract balance (emergency escape hatch).
///
/// ACCUMULATED_MESSAGE_FEES is intentionally not touched: the counter only
/// decreases through `WithdrawMessageFees`, so the ledger stays auditable
/// even after an emergency sweep.
pub fn execute_withdraw_all(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    let destination_addr = deps.api.addr_validate(&destination)?;
    let balance = deps.querier.query_all_balances(env.contract.address)?;

    let mut response = Response::new()
        .add_attribute("method", "withdraw_all")
        .add_attribute("destination", destination_addr.to_string());

    if !balance.is_empty() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: destination_addr.to_string(),
            amount: balance,
        }));
    }

    Ok(response)
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Propose a new admin (starts timelock).
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let pending = PendingAdmin {
        new_address: new_admin_addr.clone(),
        execute_after: env.block.time.plus_seconds(ADMIN_TIMELOCK_DURATION),
    };
    PENDING_ADMIN.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("method", "propose_admin")
        .add_attribute("new_admin", new_admin_addr.to_string())
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending admin role (after timelock).
pub fn execute_accept_admin(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingAdmin);
    }

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.admin = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_admin")
        .add_attribute("new_admin", pending.new_address.to_string()))
}

/// Cancel pending admin proposal.
pub fn execute_cancel_admin_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_admin_proposal"))
}
