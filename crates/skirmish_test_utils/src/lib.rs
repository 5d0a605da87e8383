//! # Skirmish Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Fixture builders for units and small battle setups
//! - Seeded RNG helpers for deterministic damage rolls
//! - Fixed-point conveniences for test setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;

/// Re-export proptest for convenience.
pub use proptest;
