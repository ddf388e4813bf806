//! # In-Memory Replay Ledger
//!
//! Process-lifetime replay state: a concurrent map from tag identity to the
//! highest accepted read counter. Entries are created on first acceptance
//! and never deleted; nothing is persisted across restarts.

use crate::domain::entities::{ReadCounter, TagUid};
use crate::ports::outbound::{LedgerError, ReplayLedger};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

/// In-memory [`ReplayLedger`] backed by a sharded concurrent map.
///
/// The `entry()` API holds the shard write lock across the whole
/// read-compare-update, which serializes decisions for the same UID while
/// letting distinct UIDs proceed concurrently. That is exactly the per-key
/// atomicity the outbound port contract requires.
#[derive(Debug, Default)]
pub struct InMemoryReplayLedger {
    counters: DashMap<TagUid, ReadCounter>,
}

impl InMemoryReplayLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Number of tag identities tracked so far.
    pub fn identity_count(&self) -> usize {
        self.counters.len()
    }
}

impl ReplayLedger for InMemoryReplayLedger {
    fn check_and_advance(&self, uid: &TagUid, counter: ReadCounter) -> Result<(), LedgerError> {
        match self.counters.entry(*uid) {
            Entry::Occupied(mut occupied) => {
                let last_accepted = *occupied.get();
                if counter > last_accepted {
                    *occupied.get_mut() = counter;
                    Ok(())
                } else {
                    Err(LedgerError::StaleCounter {
                        presented: counter,
                        last_accepted,
                    })
                }
            }
            Entry::Vacant(vacant) => {
                debug!(uid = %uid, counter = counter.value(), "Tracking new tag identity");
                vacant.insert(counter);
                Ok(())
            }
        }
    }

    fn last_accepted(&self, uid: &TagUid) -> Option<ReadCounter> {
        self.counters.get(uid).map(|entry| *entry.value())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
