//! Hash computation for cross-chain verification
//!
//! This module provides the canonical digests the bridge verifies against:
//! the validator-set digest (keccak256 of the packed, insertion-ordered
//! address list) and the message signing digest
//! (`keccak256(abi.encode(source, destination, payload, epochId, eventId))`).
//!
//! The signing digest is computed over the raw structured fields with no
//! message prefix of any kind. Applying an Ethereum `\x19...` personal-sign
//! prefix here would break interoperability with the counterpart chain.
//!
//! # Signing digest byte layout
//! - Bytes 0-31:    source (bytes32)
//! - Bytes 32-63:   destination (bytes32)
//! - Bytes 64-95:   offset to payload tail (0xa0 = 160)
//! - Bytes 96-127:  epochId (uint256, big-endian, left-padded)
//! - Bytes 128-159: eventId (uint256, big-endian, left-padded)
//! - Bytes 160-191: payload length (uint256)
//! - Bytes 192-..:  payload data, zero-padded to a 32-byte boundary

use cosmwasm_std::{Addr, Binary, Deps, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Byte length of a validator address (Ethereum-style)
pub const VALIDATOR_ADDRESS_LEN: usize = 20;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the validator-set digest: keccak256 of the packed concatenation
/// of the validator addresses in insertion order. No sorting, no padding.
pub fn validator_set_digest(validators: &[Binary]) -> [u8; 32] {
    let mut data = Vec::with_capacity(validators.len() * VALIDATOR_ADDRESS_LEN);
    for validator in validators {
        data.extend_from_slice(validator.as_slice());
    }
    keccak256(&data)
}

/// Compute the canonical message signing digest.
///
/// Matches the Solidity
/// `keccak256(abi.encode(source, destination, payload, epochId, eventId))`.
/// Source and destination are bound into the digest so a proof cannot be
/// replayed against a different source/destination pair.
pub fn signing_digest(
    source: &[u8; 32],
    destination: &[u8; 32],
    payload: &[u8],
    epoch_id: u64,
    event_id: u64,
) -> [u8; 32] {
    let padded_len = payload.len().div_ceil(32) * 32;
    let mut data = vec![0u8; 192 + padded_len];

    data[0..32].copy_from_slice(source);
    data[32..64].copy_from_slice(destination);

    // Offset to the dynamic payload tail: 5 head slots = 160 (0xa0)
    data[95] = 160;

    data[96 + 24..128].copy_from_slice(&epoch_id.to_be_bytes());
    data[128 + 24..160].copy_from_slice(&event_id.to_be_bytes());

    // Payload length as uint256, then the data padded to a 32-byte boundary
    data[160 + 24..192].copy_from_slice(&(payload.len() as u64).to_be_bytes());
    data[192..192 + payload.len()].copy_from_slice(payload);

    keccak256(&data)
}

/// Encode a validator-set rotation payload.
///
/// Matches `abi.encode(address[] validators, uint256 newEpochId)`:
/// - Bytes 0-31:   offset to the array tail (0x40 = 64)
/// - Bytes 32-63:  newEpochId (uint256)
/// - Bytes 64-95:  array length
/// - Bytes 96-..:  one 32-byte slot per address, left-padded
pub fn encode_rotation_payload(validators: &[Binary], new_epoch_id: u64) -> Vec<u8> {
    let mut data = vec![0u8; 96 + validators.len() * 32];

    data[31] = 64;
    data[32 + 24..64].copy_from_slice(&new_epoch_id.to_be_bytes());
    data[64 + 24..96].copy_from_slice(&(validators.len() as u64).to_be_bytes());

    for (i, validator) in validators.iter().enumerate() {
        let slot = 96 + i * 32;
        let bytes = validator.as_slice();
        data[slot + 32 - bytes.len()..slot + 32].copy_from_slice(bytes);
    }

    data
}

/// Decode a validator-set rotation payload. Returns `None` if the bytes do
/// not follow the layout produced by [`encode_rotation_payload`].
pub fn decode_rotation_payload(payload: &[u8]) -> Option<(Vec<Binary>, u64)> {
    if payload.len() < 96 || payload.len() % 32 != 0 {
        return None;
    }

    // Array offset must point directly past the two head slots
    if payload[0..31] != [0u8; 31] || payload[31] != 64 {
        return None;
    }

    let new_epoch_id = decode_uint256_as_u64(&payload[32..64])?;
    let count = decode_uint256_as_u64(&payload[64..96])? as usize;

    if payload.len() != 96 + count * 32 {
        return None;
    }

    let mut validators = Vec::with_capacity(count);
    for i in 0..count {
        let slot = &payload[96 + i * 32..96 + (i + 1) * 32];
        // Addresses are left-padded 20-byte values
        if slot[0..32 - VALIDATOR_ADDRESS_LEN] != [0u8; 32 - VALIDATOR_ADDRESS_LEN] {
            return None;
        }
        validators.push(Binary::from(&slot[32 - VALIDATOR_ADDRESS_LEN..]));
    }

    Some((validators, new_epoch_id))
}

/// Derive the 20-byte signer address from an uncompressed SEC1 public key:
/// `keccak256(pubkey[1..])[12..32]`.
pub fn address_from_pubkey(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..32]);
    Some(address)
}

/// Encode a local bech32 address as 32 bytes (canonical form, left-padded),
/// for binding the inbound destination into the signing digest.
pub fn encode_local_address(deps: Deps, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = deps.api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();

    let mut result = [0u8; 32];
    let start = 32 - bytes.len();
    result[start..].copy_from_slice(bytes);

    Ok(result)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Read a uint256 slot as u64, rejecting values that do not fit.
fn decode_uint256_as_u64(slot: &[u8]) -> Option<u64> {
    if slot[0..24] != [0u8; 24] {
        return None;
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&slot[24..32]);
    Some(u64::from_be_bytes(bytes))
}
