//! # Tap Verification Service
//!
//! Application service layer that implements the `TapVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`TapVerificationApi`)
//! - Uses the outbound port (`ReplayLedger`) for replay bookkeeping
//! - Delegates cryptographic operations to the domain layer
//!
//! ## Security Notes
//!
//! - The MAC check is unconditional and gates the replay check; there is no
//!   mode in which the ledger runs without a verified MAC
//! - Log lines carry only the UID and counter. Keys, derivation vectors and
//!   candidate MACs never reach any sink.

use crate::domain::entities::{AcceptedTap, MasterKey, ReadCounter, ReceivedMac, TagUid};
use crate::domain::errors::TapError;
use crate::domain::session::{derive_session_key, expected_tap_mac, mac_matches};
use crate::ports::inbound::TapVerificationApi;
use crate::ports::outbound::{LedgerError, ReplayLedger};
use tracing::{debug, warn};

/// Tap Verification Service.
///
/// Holds the process-lifetime master key and the injected replay ledger.
/// All cryptographic steps are synchronous, bounded-time computation over
/// fixed-size buffers; nothing here blocks or suspends.
pub struct TapVerificationService<L: ReplayLedger> {
    key: MasterKey,
    ledger: L,
}

impl<L: ReplayLedger> TapVerificationService<L> {
    /// Create a new verification service.
    ///
    /// # Arguments
    /// * `key` - the master key supplied by the shell at startup
    /// * `ledger` - the replay ledger implementation
    pub fn new(key: MasterKey, ledger: L) -> Self {
        Self { key, ledger }
    }

    /// The injected replay ledger.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<L: ReplayLedger> TapVerificationApi for TapVerificationService<L> {
    fn verify_tap(
        &self,
        uid_hex: &str,
        counter_hex: &str,
        mac_hex: &str,
    ) -> Result<AcceptedTap, TapError> {
        let uid = TagUid::from_hex(uid_hex)?;
        let counter = ReadCounter::from_hex(counter_hex)?;
        let mac = ReceivedMac::from_hex(mac_hex)?;

        self.verify_decoded(&uid, counter, &mac)
    }

    fn verify_decoded(
        &self,
        uid: &TagUid,
        counter: ReadCounter,
        mac: &ReceivedMac,
    ) -> Result<AcceptedTap, TapError> {
        // 1. Derive the session key and the MAC a genuine tag would present.
        let session_key = derive_session_key(&self.key, uid, counter);
        let expected = expected_tap_mac(&session_key);

        // 2. Constant-time comparison. On mismatch the ledger is neither
        //    consulted nor mutated: a forged tap must not consume a counter.
        if !mac_matches(&expected, mac) {
            warn!(uid = %uid, counter = counter.value(), "Tap rejected: MAC mismatch");
            return Err(TapError::InvalidMac);
        }

        // 3. Replay check and ledger advance, atomic per identity.
        match self.ledger.check_and_advance(uid, counter) {
            Ok(()) => {
                debug!(uid = %uid, counter = counter.value(), "Tap accepted");
                Ok(AcceptedTap {
                    uid: *uid,
                    counter: counter.value(),
                })
            }
            Err(LedgerError::StaleCounter {
                presented,
                last_accepted,
            }) => {
                warn!(
                    uid = %uid,
                    presented = presented.value(),
                    last_accepted = last_accepted.value(),
                    "Tap rejected: replay"
                );
                Err(TapError::ReplayDetected {
                    presented: presented.value(),
                    last_accepted: last_accepted.value(),
                })
            }
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
