//! # seedverify-core
//! Wordlist, prefix prediction and checksum validation for BIP-39 backups.
//!
//! # Modules
//!
//! - [`wordlist`]: index/word lookup over the 2048-word English list
//! - [`predict`]: next-letter sets and unique completions for a typed prefix
//! - [`bits`]: big-endian 11-bit field packing
//! - [`checksum`]: mnemonic length model and checksum validation
//! - [`types`]: `Node` and `Phrase`, both zeroized on drop
//! - [`traits`]: `DeviceDeriver`, the seam to the secure element

pub mod bits;
pub mod checksum;
pub mod constants;
mod english;
pub mod error;
pub mod predict;
pub mod traits;
pub mod types;
pub mod wordlist;

pub use checksum::{MnemonicLength, PackedMnemonic, check_mnemonic, valid_checksum};
pub use predict::{LetterSet, Prediction, next_letters};
pub use traits::DeviceDeriver;
pub use types::{Node, Phrase};
