//! In-process device backed by a seed held in memory.
//!
//! Stands in for the secure element on hosts without one, and in tests. It
//! performs the same derivation the hardware would.

use tracing::debug;

use seedverify_core::checksum::check_mnemonic;
use seedverify_core::error::DeviceError;
use seedverify_core::{DeviceDeriver, Node, Phrase};

use crate::bip32::{derive_path, master_node};
use crate::error::BackupError;
use crate::seed::Seed;

#[derive(Debug, Clone)]
pub struct SoftwareDevice {
    seed: Seed,
}

impl SoftwareDevice {
    pub fn from_seed(seed: Seed) -> Self {
        Self { seed }
    }

    /// Provision from a mnemonic. Rejects phrases that fail validation.
    pub fn from_phrase(phrase: Phrase) -> Result<Self, BackupError> {
        check_mnemonic(phrase.as_str())?;
        Ok(Self::from_seed(Seed::from_phrase(phrase)))
    }
}

impl DeviceDeriver for SoftwareDevice {
    fn derive_node(&self, path: &[u32]) -> Result<Node, DeviceError> {
        debug!(depth = path.len(), "device: deriving node");
        let master = master_node(&self.seed)?;
        Ok(derive_path(&master, path)?)
    }
}
