//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{AcceptedTap, ReadCounter, ReceivedMac, TagUid};
use crate::domain::errors::TapError;

/// Primary Tap Verification API.
///
/// This is the entry point the HTTP shell calls with the three opaque hex
/// fields it extracted from a request. The core performs no transport
/// parsing; the shell maps the returned outcome to status codes.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait TapVerificationApi: Send + Sync {
    /// Verify a tap from its wire-format hex fields.
    ///
    /// Decodes and width-checks the fields, then delegates to
    /// [`Self::verify_decoded`].
    ///
    /// # Errors
    /// * `TapError::MalformedInput` - a field failed to decode
    /// * `TapError::InvalidMac` - the MAC did not verify
    /// * `TapError::ReplayDetected` - valid MAC but stale counter
    fn verify_tap(
        &self,
        uid_hex: &str,
        counter_hex: &str,
        mac_hex: &str,
    ) -> Result<AcceptedTap, TapError>;

    /// Verify a tap whose fields were already decoded at the boundary.
    ///
    /// The MAC check always runs and always precedes the replay check; the
    /// ledger is consulted and mutated only after the MAC has verified.
    fn verify_decoded(
        &self,
        uid: &TagUid,
        counter: ReadCounter,
        mac: &ReceivedMac,
    ) -> Result<AcceptedTap, TapError>;
}
