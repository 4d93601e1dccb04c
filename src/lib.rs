//! Test-only library interface for restless.
//!
//! Re-exports the pure movement-pipeline modules so they can be tested on
//! the host (no embedded hardware required): `cargo test --lib`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod hid;
pub mod motion;
pub mod rng;
