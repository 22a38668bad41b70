//! Execute message handlers, one module per concern.

mod admin;
mod config;
mod inbound;
mod outbound;
mod validators;

pub use admin::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_propose_admin,
    execute_withdraw_all, execute_withdraw_message_fees,
};
pub use config::{
    execute_set_active, execute_set_bridge_fee, execute_set_max_message_length,
    execute_set_max_reward_payout, execute_set_proof_ttl, execute_set_send_message_fee,
    execute_set_threshold,
};
pub use inbound::execute_receive_message;
pub use outbound::execute_send_message;
pub use validators::{execute_force_active_set, execute_force_historic_set};

use cosmwasm_std::{Binary, MessageInfo, Uint128};

use crate::error::ContractError;
use crate::state::Config;

/// Total amount of the fee denom attached to the call.
pub(crate) fn paid_amount(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Admin gate shared by all privileged handlers.
pub(crate) fn ensure_admin(config: &Config, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Check a Binary carries exactly 32 bytes (remote accounts).
pub(crate) fn to_bytes32(value: &Binary, field: &str) -> Result<[u8; 32], ContractError> {
    value
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidAddress {
            reason: format!("{} must be exactly 32 bytes, got {}", field, value.len()),
        })
}
