//! # Tap Errors
//!
//! Error taxonomy for tap verification. All failures are per-request and
//! recoverable by the caller presenting a fresh tap; nothing here is fatal
//! to the process.

use thiserror::Error;

/// Errors that can occur during tap verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TapError {
    /// A wire field failed to decode (bad hex or wrong width). Caller error;
    /// nothing is ever truncated or zero-padded to compensate.
    #[error("Malformed {field} field: {reason}")]
    MalformedInput {
        /// Which wire field was rejected (`uid`, `counter`, `mac`, or `key`).
        field: &'static str,
        /// Decoder detail, safe to surface to the caller.
        reason: String,
    },

    /// The presented MAC does not match the one derived for this tag and
    /// counter. Deliberately carries no further detail: distinguishing a
    /// forged tag from a wrong key would hand an attacker an oracle.
    #[error("Tap MAC verification failed")]
    InvalidMac,

    /// The MAC verified but the counter does not advance the ledger; the tap
    /// is a replay of an already-accepted read. Reported distinctly from
    /// [`TapError::InvalidMac`] because the holder can act on it (tap again).
    #[error("Replay detected: counter {presented} is not above last accepted {last_accepted}")]
    ReplayDetected {
        /// Counter value presented with this tap.
        presented: u32,
        /// Highest counter previously accepted for this identity.
        last_accepted: u32,
    },
}
