//! Signature recovery and threshold counting
//!
//! Each inbound proof carries one `(v, r, s)` signature slot per claimed
//! validator. A slot counts toward consensus only when the address recovered
//! over the signing digest equals the claimed validator at the *same index*;
//! a valid signature sitting in the wrong slot does not count. Malformed or
//! absent slots (`v` outside 27/28, bad lengths, unrecoverable points) are
//! skipped without aborting the loop.

use cosmwasm_std::{Api, Binary};

use crate::hash::address_from_pubkey;
use crate::msg::SignatureData;

/// Number of matching signatures required for a claimed set of the given
/// size. Integer floor division: 5 validators at 60% require 3.
pub fn required_signatures(validator_count: usize, threshold_percent: u64) -> u64 {
    validator_count as u64 * threshold_percent / 100
}

/// Recover the signer address from a `(v, r, s)` signature over a raw
/// 32-byte digest. Returns `None` for anything that does not recover
/// cleanly; the caller treats that slot as a non-vote.
pub fn recover_signer(api: &dyn Api, digest: &[u8; 32], sig: &SignatureData) -> Option<[u8; 20]> {
    // Ethereum convention: v is 27 or 28. v = 0 marks an absent slot.
    let recovery_id = match sig.v {
        27 | 28 => sig.v - 27,
        _ => return None,
    };

    if sig.r.len() != 32 || sig.s.len() != 32 {
        return None;
    }

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(sig.r.as_slice());
    signature[32..].copy_from_slice(sig.s.as_slice());

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature, recovery_id)
        .ok()?;
    address_from_pubkey(&pubkey)
}

/// Count how many signature slots recover to their claimed validator.
///
/// `signatures` and `validators` must already be length-checked by the
/// caller; slots are compared strictly by index.
pub fn count_matching_signatures(
    api: &dyn Api,
    digest: &[u8; 32],
    signatures: &[SignatureData],
    validators: &[Binary],
) -> u64 {
    let mut matched = 0u64;
    for (sig, claimed) in signatures.iter().zip(validators.iter()) {
        if let Some(recovered) = recover_signer(api, digest, sig) {
            if recovered[..] == *claimed.as_slice() {
                matched += 1;
            }
        }
    }
    matched
}
