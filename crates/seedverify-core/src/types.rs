//! Secret-bearing values shared between the checksum and derivation layers.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A BIP-32 node: private key and chain code, both 32 bytes big-endian.
///
/// Zeroized on drop. Never persisted or logged.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Node {
    private_key: [u8; 32],
    chain_code: [u8; 32],
}

impl Node {
    pub fn new(private_key: [u8; 32], chain_code: [u8; 32]) -> Self {
        Self {
            private_key,
            chain_code,
        }
    }

    /// Split a 64-byte `private_key ‖ chain_code` buffer.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut private_key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        private_key.copy_from_slice(&bytes[..32]);
        chain_code.copy_from_slice(&bytes[32..]);
        Self {
            private_key,
            chain_code,
        }
    }

    /// The 64-byte `private_key ‖ chain_code` encoding.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 64]> {
        let mut out = Zeroizing::new([0u8; 64]);
        out[..32].copy_from_slice(&self.private_key);
        out[32..].copy_from_slice(&self.chain_code);
        out
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

/// Constant-time over all 64 bytes.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..]).into()
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("private_key", &"[REDACTED]")
            .field("chain_code", &"[REDACTED]")
            .finish()
    }
}

/// A mnemonic phrase in transit.
///
/// Owns its text and wipes it on drop. Operations that consume a `Phrase`
/// treat its buffer as destroyed afterwards.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Phrase(String);

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').count()
    }
}

impl From<String> for Phrase {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phrase")
            .field("words", &self.word_count())
            .field("text", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> Node {
        let mut bytes = [0u8; 64];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Node::from_bytes(&bytes)
    }

    #[test]
    fn node_bytes_round_trip() {
        let node = sample_node();
        assert_eq!(node.private_key()[0], 0);
        assert_eq!(node.chain_code()[0], 32);
        let again = Node::from_bytes(&node.to_bytes());
        assert_eq!(node, again);
    }

    #[test]
    fn node_eq_detects_last_byte() {
        let node = sample_node();
        let mut bytes = *node.to_bytes();
        bytes[63] ^= 1;
        assert_ne!(node, Node::from_bytes(&bytes));
    }

    #[test]
    fn node_debug_hides_material() {
        let node = Node::new([0xAB; 32], [0xCD; 32]);
        let debug = format!("{node:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.to_lowercase().contains("ab, "));
        assert!(!debug.contains("171"));
    }

    #[test]
    fn phrase_debug_hides_text() {
        let phrase = Phrase::from("abandon ability able");
        let debug = format!("{phrase:?}");
        assert!(debug.contains("words: 3"));
        assert!(!debug.contains("abandon"));
    }

    #[test]
    fn phrase_zeroize_clears_text() {
        let mut phrase = Phrase::from("zoo zoo");
        phrase.zeroize();
        assert!(phrase.is_empty());
    }
}
