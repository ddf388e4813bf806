//! # Domain Entities
//!
//! Typed, fixed-width byte entities for tap verification.
//!
//! Every wire field is decoded and width-checked exactly once, here at the
//! boundary; everything downstream operates on byte buffers of known length.
//! Hex input is case-insensitive and canonicalized to lowercase.

use crate::domain::errors::TapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Tag UID length in bytes (14 hex characters on the wire).
pub const UID_LEN: usize = 7;

/// Read counter length in bytes (6 hex characters on the wire).
pub const COUNTER_LEN: usize = 3;

/// Truncated MAC length in bytes (16 hex characters on the wire).
pub const MAC_LEN: usize = 8;

/// Master key length in bytes.
pub const KEY_LEN: usize = 16;

/// Decode a fixed-width hex field, rejecting anything that is not exactly
/// `N` bytes of valid hex. Never truncates or zero-pads.
fn decode_fixed<const N: usize>(field: &'static str, input: &str) -> Result<[u8; N], TapError> {
    if input.len() != N * 2 {
        return Err(TapError::MalformedInput {
            field,
            reason: format!("expected {} hex characters, got {}", N * 2, input.len()),
        });
    }

    let decoded = hex::decode(input).map_err(|e| TapError::MalformedInput {
        field,
        reason: e.to_string(),
    })?;

    let mut out = [0u8; N];
    out.copy_from_slice(&decoded);
    Ok(out)
}

// =============================================================================
// Tag Identity
// =============================================================================

/// 7-byte value uniquely identifying one physical tag.
///
/// Parsed from a 14-character hex string; input case is irrelevant, the
/// canonical representation is raw bytes (lowercase hex for display).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagUid([u8; UID_LEN]);

impl TagUid {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from the 14-character wire hex field.
    pub fn from_hex(input: &str) -> Result<Self, TapError> {
        decode_fixed::<UID_LEN>("uid", input).map(Self)
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }
}

impl fmt::Display for TagUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// =============================================================================
// Read Counter
// =============================================================================

/// Unsigned 24-bit tag read counter.
///
/// Transmitted as a 6-character big-endian hex string; the integer value is
/// what monotonicity is judged on, while [`Self::derivation_bytes`] yields
/// the little-endian byte order the session-key derivation consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReadCounter(u32);

impl ReadCounter {
    /// Largest representable counter value (24 bits).
    pub const MAX: u32 = 0x00ff_ffff;

    /// Create from an integer value, rejecting values above 24 bits.
    pub fn new(value: u32) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Create from the three big-endian wire bytes.
    pub fn from_be_bytes(bytes: [u8; COUNTER_LEN]) -> Self {
        Self(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse from the 6-character wire hex field.
    pub fn from_hex(input: &str) -> Result<Self, TapError> {
        decode_fixed::<COUNTER_LEN>("counter", input).map(Self::from_be_bytes)
    }

    /// Integer value of the counter.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The three counter bytes in little-endian order, as consumed by the
    /// derivation vector.
    pub fn derivation_bytes(self) -> [u8; COUNTER_LEN] {
        let le = self.0.to_le_bytes();
        [le[0], le[1], le[2]]
    }
}

impl fmt::Display for ReadCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Received MAC
// =============================================================================

/// 8-byte truncated MAC presented by the caller as proof of authenticity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReceivedMac([u8; MAC_LEN]);

impl ReceivedMac {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; MAC_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from the 16-character wire hex field.
    pub fn from_hex(input: &str) -> Result<Self, TapError> {
        decode_fixed::<MAC_LEN>("mac", input).map(Self)
    }

    /// Raw MAC bytes.
    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.0
    }
}

// =============================================================================
// Key Material
// =============================================================================

/// 16-byte master secret shared by all tags.
///
/// Immutable for the process lifetime. Wiped on drop; `Debug` is redacted;
/// never serialized or logged in cleartext.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey([u8; KEY_LEN]);

impl MasterKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from a 32-character hex string supplied by the shell at startup.
    pub fn from_hex(input: &str) -> Result<Self, TapError> {
        decode_fixed::<KEY_LEN>("key", input).map(Self)
    }

    /// The tag vendor's factory-default key: sixteen zero bytes.
    pub fn factory_default() -> Self {
        Self([0u8; KEY_LEN])
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(<redacted>)")
    }
}

/// 16-byte secret derived per verification attempt from the master key and
/// the tag's identity/counter material.
///
/// Exists only for the duration of one verification; wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey([u8; KEY_LEN]);

impl SessionKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(<redacted>)")
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// A tap that passed MAC verification and advanced the replay ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedTap {
    /// Identity of the tag that was tapped.
    pub uid: TagUid,
    /// The counter value the ledger now records for this identity.
    pub counter: u32,
}

// =============================================================================
// UNIT TESTS
// =============================================================================
