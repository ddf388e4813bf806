//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs.

use crate::domain::entities::{ReadCounter, TagUid};
use thiserror::Error;

/// Error from replay ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The presented counter does not advance past the recorded one.
    #[error("Stale counter: {presented} is not above last accepted {last_accepted}")]
    StaleCounter {
        /// Counter presented with the tap.
        presented: ReadCounter,
        /// Highest counter previously accepted for the identity.
        last_accepted: ReadCounter,
    },
}

/// Replay-protection ledger: highest accepted read counter per tag identity.
///
/// Injected into the verification service rather than held as ambient global
/// state, so the concurrency contract below is testable in isolation.
///
/// ## Concurrency Contract
///
/// [`Self::check_and_advance`] MUST be atomic per UID: for a fixed identity
/// the read-compare-update sequence is serialized, so two concurrent taps can
/// never both be accepted against the same stale counter. No ordering
/// guarantee exists (or is meaningful) across different identities, and
/// operations on distinct identities must not block one another.
pub trait ReplayLedger: Send + Sync {
    /// Accept `counter` for `uid` iff it strictly exceeds every previously
    /// accepted counter for that identity, recording it in the same atomic
    /// step.
    ///
    /// On `Err` the ledger is guaranteed unchanged.
    ///
    /// # Errors
    /// * `LedgerError::StaleCounter` - counter does not advance the ledger
    fn check_and_advance(&self, uid: &TagUid, counter: ReadCounter) -> Result<(), LedgerError>;

    /// Highest counter accepted so far for `uid`, if any tap has been
    /// accepted for it.
    fn last_accepted(&self, uid: &TagUid) -> Option<ReadCounter>;
}
