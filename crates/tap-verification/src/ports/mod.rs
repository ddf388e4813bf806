//! # Ports Layer
//!
//! Trait definitions for the subsystem's inbound and outbound interfaces.

pub mod inbound;
pub mod outbound;
