//! Reference-vector, adversarial and end-to-end tests for SeedVerify.
//!
//! Checksum validation and seed derivation are cross-checked against an
//! independent BIP-39 implementation, and every comparison path is probed
//! with single-word and single-bit corruptions.

pub mod helpers;
