//! # Tap Verification Subsystem
//!
//! Authenticates physical proximity-tap events from cryptographic NFC tags
//! and blocks replays of previously seen taps.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-memory replay ledger implementation
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Mandatory MAC check**: the replay ledger is never consulted, and never
//!   mutated, before the tap MAC has verified
//! - **Constant-time comparison**: received MACs are compared with `subtle`,
//!   never with a short-circuiting equality
//! - **Secret hygiene**: master and session keys are wiped on drop and carry
//!   redacted `Debug` implementations; no intermediate cryptographic value is
//!   ever logged

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryReplayLedger;
pub use domain::entities::{AcceptedTap, MasterKey, ReadCounter, ReceivedMac, SessionKey, TagUid};
pub use domain::errors::TapError;
pub use domain::session::{derive_session_key, expected_tap_mac, session_vector};
pub use ports::inbound::TapVerificationApi;
pub use ports::outbound::{LedgerError, ReplayLedger};
pub use service::TapVerificationService;
