//! # Shared CMAC - AES-CMAC Primitives
//!
//! Cipher-based MAC construction used by the tap verification subsystem,
//! implemented from first principles over the AES-128 block cipher.
//!
//! ## Components
//!
//! | Function | Purpose |
//! |----------|---------|
//! | `derive_subkeys` | K1/K2 subkey generation from a 128-bit key |
//! | `compute_mac` | Full 16-byte CMAC over an arbitrary message |
//! | `truncate_mac` | Vendor truncation to the 8-byte transmitted width |
//!
//! ## Security Properties
//!
//! - Subkey doubling uses masked arithmetic (no data-dependent branches)
//! - Subkeys and intermediate cipher state are wiped on drop
//! - Byte-exact padding/XOR placement pinned by RFC 4493 known-answer tests

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cmac;

pub use cmac::{compute_mac, derive_subkeys, truncate_mac, Subkeys, BLOCK_SIZE, TRUNCATED_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
