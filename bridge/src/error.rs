//! Error types for the message bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization & State Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    #[error("Bridge is inactive")]
    BridgeInactive,

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Message payload is empty")]
    EmptyMessage,

    #[error("Message exceeds max length: {length} bytes, max {max}")]
    ExceedsMaxLength { length: u64, max: u64 },

    #[error("Insufficient fee: expected {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    #[error("Must supply the bridge verification fee: expected {expected}, got {got}")]
    MustSupplyFee { expected: Uint128, got: Uint128 },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid threshold percent: {percent} (must be 1..=100)")]
    InvalidThreshold { percent: u64 },

    // ========================================================================
    // Validator Set Management Errors
    // ========================================================================

    #[error("Validator set is empty")]
    EmptyValidatorSet,

    #[error("Validator set is historic: epoch {epoch_id} is behind active epoch {active_epoch_id}")]
    SetIsHistoric { epoch_id: u64, active_epoch_id: u64 },

    #[error("Validator set is inactive: epoch {epoch_id} already expired under TTL {proof_ttl}")]
    SetIsInactive { epoch_id: u64, proof_ttl: u64 },

    #[error("Epoch replayed: {epoch_id} is already the active validator set")]
    EpochReplayed { epoch_id: u64 },

    // ========================================================================
    // Verification Errors
    // ========================================================================

    #[error("Future validator set: epoch {epoch_id} is ahead of active epoch {active_epoch_id}")]
    FutureValidatorSet { epoch_id: u64, active_epoch_id: u64 },

    #[error("Event replayed: {event_id} was already verified")]
    EventReplayed { event_id: u64 },

    #[error("Invalid validator set: claimed list is empty")]
    InvalidValidatorSet,

    #[error("Unexpected validator digest for epoch {epoch_id}")]
    UnexpectedValidatorDigest { epoch_id: u64 },

    #[error("Signature count mismatch: {signatures} signatures for {validators} validators")]
    SignatureCountMismatch { signatures: usize, validators: usize },

    #[error("Not enough signatures: got {got}, need {required}")]
    NotEnoughSignatures { got: u64, required: u64 },

    #[error("Expired proof: epoch {epoch_id} is {distance} epochs behind, TTL is {proof_ttl}")]
    ExpiredProof {
        epoch_id: u64,
        distance: u64,
        proof_ttl: u64,
    },

    #[error("Invalid rotation payload")]
    InvalidRotationPayload,

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Withdrawal exceeds accumulated fees: requested {requested}, available {available}")]
    WithdrawAmountTooHigh {
        requested: Uint128,
        available: Uint128,
    },
}
