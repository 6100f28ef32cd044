//! Trait interfaces for SeedVerify.
//!
//! - [`DeviceDeriver`]: key derivation from a master seed the caller never
//!   sees (secure element, or a software stand-in)

use crate::error::DeviceError;
use crate::types::Node;

/// Derives BIP-32 nodes from a device-held master seed.
///
/// Implemented by the secure element bridge in production and by
/// `seedverify_backup::device::SoftwareDevice` for tests and tooling.
pub trait DeviceDeriver {
    /// Derive the node at `path`, a sequence of child indices below the
    /// master. The master seed never leaves the implementation.
    fn derive_node(&self, path: &[u32]) -> Result<Node, DeviceError>;
}

impl<D: DeviceDeriver + ?Sized> DeviceDeriver for &D {
    fn derive_node(&self, path: &[u32]) -> Result<Node, DeviceError> {
        (**self).derive_node(path)
    }
}

impl<D: DeviceDeriver + ?Sized> DeviceDeriver for Box<D> {
    fn derive_node(&self, path: &[u32]) -> Result<Node, DeviceError> {
        (**self).derive_node(path)
    }
}
