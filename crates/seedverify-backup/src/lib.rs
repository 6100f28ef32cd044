//! # seedverify-backup
//! Compare a hand-entered BIP-39 backup against the device's master seed.
//!
//! The mnemonic is stretched, derived to a fixed hardened BIP-32 child and
//! compared against the same child produced by the device, so the device
//! seed itself never leaves the [`DeviceDeriver`](seedverify_core::DeviceDeriver).
//!
//! # Modules
//!
//! - [`seed`]: PBKDF2-HMAC-SHA512 seed stretching
//! - [`bip32`]: master node and hardened child derivation on secp256k1
//! - [`compare`]: `SeedComparator` and `VerifyOutcome`
//! - [`device`]: `SoftwareDevice`, an in-memory deriver
//! - [`entry`]: headless word-by-word backup entry
//! - [`error`]: `BackupError` and `EntryError`

pub mod bip32;
pub mod compare;
pub mod device;
pub mod entry;
pub mod error;
pub mod seed;

pub use compare::{SeedComparator, VerifyOutcome, mnemonic_node};
pub use device::SoftwareDevice;
pub use entry::{BackupEntry, WordInput};
pub use error::{BackupError, EntryError};
pub use seed::Seed;
