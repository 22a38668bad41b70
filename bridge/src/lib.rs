//! Message Bridge Contract - Threshold-Signed Cross-Chain Messaging
//!
//! This contract is the core of a two-way message bridge: an outbound path
//! that emits fee-tagged, sequence-numbered messages for off-chain relaying,
//! and an inbound path that accepts messages only with a proof of approval
//! from the registered validator set, verified by threshold secp256k1
//! signature recovery.
//!
//! # Outbound Flow
//! 1. An application (e.g. a token peg) calls `SendMessage` with the fee
//! 2. The messenger assigns the next event id and emits the message
//! 3. Off-chain relayers carry the message to the counterpart chain
//!
//! # Inbound Flow
//! 1. A relayer submits `ReceiveMessage` with the payload and proof
//! 2. The verifier matches the claimed validator list against the registered
//!    digest for the proof's epoch and recovers each signature slot
//! 3. Once the threshold is met, the event id is recorded in the replay
//!    guard and the payload is dispatched: rotation payloads addressed to
//!    the bridge itself rotate the validator set (paying the relayer a
//!    bounded reward), anything else is forwarded to the destination
//!    contract as a `BridgeReceiveMsg` callback
//!
//! # Security
//! - Permanent replay guard over inbound event ids
//! - Validator-set digests pin the exact signer list per epoch
//! - Proof TTL bounds how far back historic sets stay usable
//! - Raw (non-prefixed) signing digest for cross-chain interoperability
//! - Rotation rewards bounded and isolated from withdrawable fees

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
pub use crate::hash::{keccak256, signing_digest, validator_set_digest};
