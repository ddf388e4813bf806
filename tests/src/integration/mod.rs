//! Cross-crate integration tests.

pub mod flows;

use tap_verification::{
    session_vector, InMemoryReplayLedger, MasterKey, ReadCounter, TagUid, TapVerificationService,
};

/// Service keyed with the factory-default (all-zero) master key.
pub fn factory_service() -> TapVerificationService<InMemoryReplayLedger> {
    TapVerificationService::new(MasterKey::factory_default(), InMemoryReplayLedger::new())
}

/// Forge the MAC a genuine factory-keyed tag would transmit, as wire hex.
///
/// Deliberately reconstructed from the `shared-cmac` primitives rather than
/// the production derivation helpers, so these flows cross-check the whole
/// pipeline instead of comparing it against itself.
pub fn genuine_mac_hex(uid_hex: &str, counter_hex: &str) -> String {
    let uid = TagUid::from_hex(uid_hex).unwrap();
    let counter = ReadCounter::from_hex(counter_hex).unwrap();

    let sv = session_vector(&uid, counter);
    let session_key = shared_cmac::compute_mac(&[0u8; 16], &sv);
    let full = shared_cmac::compute_mac(&session_key, &[]);
    hex::encode(shared_cmac::truncate_mac(&full))
}
