//! Check a mnemonic against the device's master seed without exporting it.
//!
//! The mnemonic is stretched into a seed, turned into a BIP-32 master node,
//! and walked to the fixed hardened child `m/6516080'`. The device derives the
//! same child from its own seed, and the two 64-byte nodes are compared in
//! constant time. Only the yes/no answer leaves this module.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use seedverify_core::checksum::check_mnemonic;
use seedverify_core::constants::COMPARE_PATH;
use seedverify_core::{DeviceDeriver, Node, Phrase};

use crate::bip32::{derive_hardened, master_node};
use crate::error::BackupError;
use crate::seed::Seed;

/// Outcome of verifying a backup against the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// Wrong word count, unknown word, or bad checksum. No derivation ran.
    ChecksumInvalid,
    /// The backup reproduces the device seed.
    Match,
    /// Valid mnemonic, but for a different seed.
    Mismatch,
}

impl VerifyOutcome {
    pub fn is_match(self) -> bool {
        self == Self::Match
    }
}

/// Derive the comparison node for `phrase`. The phrase is consumed and wiped.
pub fn mnemonic_node(phrase: Phrase) -> Result<Node, BackupError> {
    let seed = Seed::from_phrase(phrase);
    let master = master_node(&seed)?;
    Ok(derive_hardened(&master, COMPARE_PATH)?)
}

/// Compares user-supplied mnemonics against a device's master seed.
#[derive(Debug)]
pub struct SeedComparator<D> {
    device: D,
}

impl<D: DeviceDeriver> SeedComparator<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Whether `phrase` derives the same node as the device.
    ///
    /// The caller is expected to have validated the checksum first (see
    /// [`verify`](Self::verify)); an invalid mnemonic simply compares unequal.
    /// The phrase is consumed and wiped.
    pub fn compare(&self, phrase: Phrase) -> Result<bool, BackupError> {
        let words = phrase.word_count();
        let ours = mnemonic_node(phrase)?;
        let theirs = self.device.derive_node(&[COMPARE_PATH])?;
        let equal = ours == theirs;
        debug!(words, equal, "compare: nodes compared");
        Ok(equal)
    }

    /// Validate the checksum, then compare. The phrase is consumed and wiped.
    pub fn verify(&self, phrase: Phrase) -> Result<VerifyOutcome, BackupError> {
        let words = phrase.word_count();
        if let Err(reason) = check_mnemonic(phrase.as_str()) {
            info!(words, %reason, "verify: checksum invalid");
            return Ok(VerifyOutcome::ChecksumInvalid);
        }
        let outcome = if self.compare(phrase)? {
            VerifyOutcome::Match
        } else {
            VerifyOutcome::Mismatch
        };
        info!(words, ?outcome, "verify: done");
        Ok(outcome)
    }
}
