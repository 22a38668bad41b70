//! Forced validator-set management (bootstrap / emergency override).

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::ensure_admin;
use crate::hash::{bytes32_to_hex, validator_set_digest};
use crate::state::{ACTIVE_EPOCH_ID, CONFIG, VALIDATOR_DIGESTS};

/// Force a new active validator set.
///
/// Rejects empty lists and epoch ids behind the current active epoch; the
/// active id never decreases through this path.
pub fn execute_force_active_set(
    deps: DepsMut,
    info: MessageInfo,
    validators: Vec<Binary>,
    epoch_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    if validators.is_empty() {
        return Err(ContractError::EmptyValidatorSet);
    }

    let active_epoch_id = ACTIVE_EPOCH_ID.load(deps.storage)?;
    if epoch_id < active_epoch_id {
        return Err(ContractError::SetIsHistoric {
            epoch_id,
            active_epoch_id,
        });
    }

    let digest = validator_set_digest(&validators);
    VALIDATOR_DIGESTS.save(deps.storage, epoch_id, &digest)?;
    ACTIVE_EPOCH_ID.save(deps.storage, &epoch_id)?;

    Ok(Response::new()
        .add_attribute("method", "force_active_validator_set")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("set_digest", bytes32_to_hex(&digest))
        .add_attribute("validator_count", validators.len().to_string()))
}

/// Force a historic validator set digest without touching the active epoch.
///
/// The epoch must still be inside the proof TTL window measured from the
/// active epoch; a distance exactly equal to the TTL is still valid.
pub fn execute_force_historic_set(
    deps: DepsMut,
    info: MessageInfo,
    validators: Vec<Binary>,
    epoch_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_admin(&config, &info)?;

    if validators.is_empty() {
        return Err(ContractError::EmptyValidatorSet);
    }

    let active_epoch_id = ACTIVE_EPOCH_ID.load(deps.storage)?;
    if active_epoch_id.saturating_sub(epoch_id) > config.proof_ttl {
        return Err(ContractError::SetIsInactive {
            epoch_id,
            proof_ttl: config.proof_ttl,
        });
    }

    let digest = validator_set_digest(&validators);
    VALIDATOR_DIGESTS.save(deps.storage, epoch_id, &digest)?;

    Ok(Response::new()
        .add_attribute("method", "force_historic_validator_set")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("set_digest", bytes32_to_hex(&digest))
        .add_attribute("validator_count", validators.len().to_string()))
}
