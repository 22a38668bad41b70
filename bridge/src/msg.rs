//! Message types for the message bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management
    pub admin: String,
    /// Native denom used for fees and reward payouts
    pub fee_denom: String,
    /// Signature threshold as an integer percent (1..=100)
    pub threshold_percent: u64,
    /// Number of epoch generations a historic validator set stays valid
    pub proof_ttl: u64,
    /// Maximum outbound payload length in bytes
    pub max_message_length: u64,
    /// Fee charged on every outbound send
    pub send_message_fee: Uint128,
    /// Verification fee charged on every inbound receive
    pub bridge_fee: Uint128,
    /// Cap on the reward paid for relaying a rotation message
    pub max_reward_payout: Uint128,
}

// ============================================================================
// Proof Types
// ============================================================================

/// A single `(v, r, s)` secp256k1 signature slot. `v` follows the Ethereum
/// convention (27/28); `v = 0` marks an absent slot.
#[cw_serde]
pub struct SignatureData {
    pub v: u8,
    /// 32-byte r component
    pub r: Binary,
    /// 32-byte s component
    pub s: Binary,
}

/// Proof of validator approval accompanying an inbound message.
///
/// `signatures` and `validators` are parallel, order-dependent lists: slot i
/// of `signatures` is checked against slot i of `validators`.
#[cw_serde]
pub struct InboundProof {
    /// Event id assigned by the source chain's outbound messenger
    pub event_id: u64,
    /// Validator-set epoch the signatures belong to
    pub epoch_id: u64,
    /// Per-validator signature slots
    pub signatures: Vec<SignatureData>,
    /// Claimed validator list (20-byte addresses, insertion order)
    pub validators: Vec<Binary>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Messaging
    // ========================================================================
    /// Send an outbound message for off-chain relaying.
    ///
    /// Authorization: Anyone. Requires the send fee attached in `fee_denom`.
    SendMessage {
        /// Destination account on the counterpart chain (32 bytes)
        destination: Binary,
        /// Application payload
        payload: Binary,
    },

    /// Deliver an inbound message with its proof of validator approval.
    ///
    /// Authorization: Anyone (typically the off-chain relayer). Requires the
    /// bridge verification fee attached in `fee_denom`.
    ///
    /// If `destination` is this contract's own address the payload must be a
    /// rotation payload and rotates the validator set, paying the sender a
    /// bounded reward. Any other destination receives a
    /// [`BridgeReceiveMsg::ReceiveBridgeMessage`] callback.
    ReceiveMessage {
        /// Source account on the counterpart chain (32 bytes)
        source: Binary,
        /// Destination contract on this chain
        destination: String,
        /// Application or rotation payload
        payload: Binary,
        /// Proof of validator approval
        proof: InboundProof,
    },

    // ========================================================================
    // Validator Set Management
    // ========================================================================
    /// Force a new active validator set (bootstrap / emergency override).
    ///
    /// Authorization: Admin only
    ForceActiveValidatorSet {
        /// Validator addresses (20 bytes each, insertion order)
        validators: Vec<Binary>,
        /// Epoch id for the new set; must not be behind the active epoch
        epoch_id: u64,
    },

    /// Force a historic validator set digest without rotating.
    ///
    /// Authorization: Admin only
    ForceHistoricValidatorSet {
        /// Validator addresses (20 bytes each, insertion order)
        validators: Vec<Binary>,
        /// Epoch id; must still be inside the proof TTL window
        epoch_id: u64,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Set the signature threshold percent (admin only)
    SetThreshold { percent: u64 },
    /// Set the proof TTL in epoch generations (admin only)
    SetProofTtl { epochs: u64 },
    /// Set the maximum outbound payload length (admin only)
    SetMaxMessageLength { length: u64 },
    /// Set the outbound send fee (admin only)
    SetSendMessageFee { amount: Uint128 },
    /// Set the inbound verification fee (admin only)
    SetBridgeFee { amount: Uint128 },
    /// Set the rotation reward cap (admin only)
    SetMaxRewardPayout { amount: Uint128 },
    /// Enable or disable the bridge (admin only)
    SetActive { active: bool },

    // ========================================================================
    // Fee Ledger
    // ========================================================================
    /// Withdraw accumulated outbound message fees (admin only).
    /// Fails if `amount` exceeds the accumulated fee ledger.
    WithdrawMessageFees { destination: String, amount: Uint128 },

    /// Sweep the entire contract balance, independent of fee accounting.
    /// Emergency escape hatch (admin only).
    WithdrawAll { destination: String },

    // ========================================================================
    // Admin Transfer
    // ========================================================================
    /// Propose a new admin (starts the 7-day timelock)
    ProposeAdmin { new_admin: String },
    /// Accept the pending admin role (after timelock)
    AcceptAdmin {},
    /// Cancel the pending admin proposal
    CancelAdminProposal {},
}

/// Callback interface delivered to the destination contract when an inbound
/// application message verifies. This is the peg adapter's receiving
/// boundary; the adapter decodes its own payload format from `payload`.
#[cw_serde]
pub enum BridgeReceiveMsg {
    ReceiveBridgeMessage {
        /// Source account on the counterpart chain (32 bytes)
        source: Binary,
        /// Application payload
        payload: Binary,
        /// Event id assigned by the source chain
        event_id: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Id of the active validator-set epoch
    #[returns(ActiveValidatorSetIdResponse)]
    ActiveValidatorSetId {},

    /// Stored validator-set digest for an epoch (None if never registered)
    #[returns(ValidatorSetDigestResponse)]
    ValidatorSetDigest { epoch_id: u64 },

    /// Whether an inbound event id has already been verified
    #[returns(EventVerifiedResponse)]
    IsEventVerified { event_id: u64 },

    /// Next outbound event id
    #[returns(SentEventIdResponse)]
    SentEventId {},

    /// Outbound fees accumulated and not yet withdrawn
    #[returns(AccumulatedMessageFeesResponse)]
    AccumulatedMessageFees {},

    /// Pending admin proposal (if any)
    #[returns(PendingAdminResponse)]
    PendingAdmin {},

    /// Compute the digest of a validator address list (pure helper)
    #[returns(DigestResponse)]
    ComputeSetDigest { validators: Vec<Binary> },

    /// Compute the exact signing digest this contract verifies for the given
    /// message fields (pure helper for off-chain signers)
    #[returns(DigestResponse)]
    SigningDigest {
        source: Binary,
        destination: String,
        payload: Binary,
        epoch_id: u64,
        event_id: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub active: bool,
    pub fee_denom: String,
    pub threshold_percent: u64,
    pub proof_ttl: u64,
    pub max_message_length: u64,
    pub send_message_fee: Uint128,
    pub bridge_fee: Uint128,
    pub max_reward_payout: Uint128,
}

#[cw_serde]
pub struct ActiveValidatorSetIdResponse {
    pub epoch_id: u64,
}

#[cw_serde]
pub struct ValidatorSetDigestResponse {
    pub epoch_id: u64,
    pub digest: Option<Binary>,
}

#[cw_serde]
pub struct EventVerifiedResponse {
    pub event_id: u64,
    pub verified: bool,
}

#[cw_serde]
pub struct SentEventIdResponse {
    pub event_id: u64,
}

#[cw_serde]
pub struct AccumulatedMessageFeesResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_admin: Option<Addr>,
    pub execute_after: Option<Timestamp>,
}

#[cw_serde]
pub struct DigestResponse {
    pub digest: Binary,
}
