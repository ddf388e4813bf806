//! # Session-Key Derivation
//!
//! Builds the per-tap derivation vector (SV2), derives the session key from
//! the master key, and computes the truncated MAC a genuine tag would have
//! transmitted for a given identity and counter.
//!
//! ## Security Notes
//!
//! - The derivation vector and session key are transient: constructed fresh
//!   per verification, never stored, wiped after use
//! - MAC comparison is constant time (`subtle`); an early-exit comparison
//!   would leak byte-position timing usable to brute-force the MAC

use crate::domain::entities::{MasterKey, ReadCounter, ReceivedMac, SessionKey, TagUid, MAC_LEN};
use shared_cmac::{compute_mac, truncate_mac, BLOCK_SIZE};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Fixed domain-separation prefix of the SV2 derivation vector.
const SESSION_VECTOR_PREFIX: [u8; 6] = [0x3c, 0xc3, 0x00, 0x01, 0x00, 0x80];

/// Build the 16-byte SV2 derivation vector:
/// prefix (6 bytes) ++ UID (7 bytes) ++ little-endian counter (3 bytes).
pub fn session_vector(uid: &TagUid, counter: ReadCounter) -> [u8; BLOCK_SIZE] {
    let mut sv = [0u8; BLOCK_SIZE];
    sv[..6].copy_from_slice(&SESSION_VECTOR_PREFIX);
    sv[6..13].copy_from_slice(uid.as_bytes());
    sv[13..].copy_from_slice(&counter.derivation_bytes());
    sv
}

/// Derive the per-tap session key: CMAC of the SV2 vector under the master
/// key.
pub fn derive_session_key(key: &MasterKey, uid: &TagUid, counter: ReadCounter) -> SessionKey {
    let mut sv = session_vector(uid, counter);
    let derived = compute_mac(key.as_bytes(), &sv);
    sv.zeroize();
    SessionKey::from_bytes(derived)
}

/// The truncated MAC a genuine tag would transmit for this session key:
/// CMAC over the empty payload, truncated to the vendor width.
pub fn expected_tap_mac(session_key: &SessionKey) -> [u8; MAC_LEN] {
    let full = compute_mac(session_key.as_bytes(), &[]);
    truncate_mac(&full)
}

/// Constant-time comparison of the derived candidate against the MAC the
/// caller presented. Fixed-length, no short circuit on first mismatch.
pub fn mac_matches(expected: &[u8; MAC_LEN], received: &ReceivedMac) -> bool {
    expected[..].ct_eq(&received.as_bytes()[..]).into()
}

// =============================================================================
// UNIT TESTS
// =============================================================================
