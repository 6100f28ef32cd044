//! CLI configuration loaded from environment variables.

use anyhow::{Context, Result, bail};
use zeroize::Zeroizing;

use seedverify_backup::{Seed, SoftwareDevice};
use seedverify_core::Phrase;
use seedverify_core::constants::SEED_LEN;

pub const DEVICE_MNEMONIC_VAR: &str = "SEEDVERIFY_DEVICE_MNEMONIC";
pub const DEVICE_SEED_VAR: &str = "SEEDVERIFY_DEVICE_SEED";
pub const LOG_VAR: &str = "SEEDVERIFY_LOG";

/// Where the software device gets its master seed from.
#[derive(Clone, Debug)]
pub enum DeviceSource {
    Mnemonic(Phrase),
    Seed(Seed),
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Master seed source for `verify`. Not needed by the other commands.
    pub device: Option<DeviceSource>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mnemonic = lookup(DEVICE_MNEMONIC_VAR).map(Zeroizing::new);
        let seed_hex = lookup(DEVICE_SEED_VAR).map(Zeroizing::new);

        let device = match (mnemonic, seed_hex) {
            (Some(_), Some(_)) => {
                bail!("set only one of {DEVICE_MNEMONIC_VAR} and {DEVICE_SEED_VAR}")
            }
            (Some(mnemonic), None) => Some(DeviceSource::Mnemonic(Phrase::new(mnemonic.trim()))),
            (None, Some(seed_hex)) => Some(DeviceSource::Seed(parse_seed(&seed_hex)?)),
            (None, None) => None,
        };

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| "info".to_string());

        Ok(Config { device, log_filter })
    }

    /// Build the software device from the configured seed source.
    pub fn software_device(&self) -> Result<SoftwareDevice> {
        match &self.device {
            Some(DeviceSource::Mnemonic(phrase)) => SoftwareDevice::from_phrase(phrase.clone())
                .with_context(|| format!("{DEVICE_MNEMONIC_VAR} is not a valid mnemonic")),
            Some(DeviceSource::Seed(seed)) => Ok(SoftwareDevice::from_seed(seed.clone())),
            None => bail!("no device configured: set {DEVICE_MNEMONIC_VAR} or {DEVICE_SEED_VAR}"),
        }
    }
}

fn parse_seed(text: &str) -> Result<Seed> {
    let bytes = Zeroizing::new(
        hex::decode(text.trim()).with_context(|| format!("{DEVICE_SEED_VAR} must be hex"))?,
    );
    if bytes.len() != SEED_LEN {
        bail!("{DEVICE_SEED_VAR} must be {SEED_LEN} bytes, got {}", bytes.len());
    }
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    seed.copy_from_slice(&bytes);
    Ok(Seed::from_bytes(*seed))
}
