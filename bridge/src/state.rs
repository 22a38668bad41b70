//! State definitions for the message bridge contract
//!
//! This module defines all storage structures and state maps: the mutable
//! configuration record, the validator-set registry, the inbound replay guard
//! and the outbound event counter / fee ledger.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration, loaded at the start of every operation.
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Whether the bridge is currently accepting traffic
    pub active: bool,
    /// Native denom used for fees and reward payouts
    pub fee_denom: String,
    /// Minimum percentage of the claimed validator set whose signatures
    /// must verify (integer percent, 1..=100)
    pub threshold_percent: u64,
    /// Number of epoch generations a historic validator set stays usable
    /// for verifying older proofs
    pub proof_ttl: u64,
    /// Maximum outbound payload length in bytes
    pub max_message_length: u64,
    /// Fee charged on every outbound send (in `fee_denom`)
    pub send_message_fee: Uint128,
    /// Verification fee charged on every inbound receive (in `fee_denom`)
    pub bridge_fee: Uint128,
    /// Cap on the reward paid for relaying a validator-set rotation
    pub max_reward_payout: Uint128,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:msg-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Id of the single active validator-set epoch. Non-decreasing through the
/// forced paths; the message-driven rotation path only guards against exact
/// equality (see `execute::inbound`).
pub const ACTIVE_EPOCH_ID: Item<u64> = Item::new("active_epoch_id");

/// Digest of the validator address list per epoch id. Digests are never
/// deleted; historic epochs beyond the proof TTL are rejected at
/// verification time instead.
pub const VALIDATOR_DIGESTS: Map<u64, [u8; 32]> = Map::new("validator_digests");

/// Replay guard: inbound event ids that have already been accepted.
/// Membership is permanent.
pub const VERIFIED_EVENT_IDS: Map<u64, bool> = Map::new("verified_event_ids");

/// Next outbound event id (starts at 0, incremented by 1 per send)
pub const SENT_EVENT_ID: Item<u64> = Item::new("sent_event_id");

/// Outbound send fees collected so far, tracked separately from the
/// contract's general balance. Only `WithdrawMessageFees` decreases this.
pub const ACCUMULATED_MESSAGE_FEES: Item<Uint128> = Item::new("accumulated_message_fees");
