//! Shared test helpers for the integration suites.

use std::cell::Cell;

use seedverify_core::constants::COMPARE_PATH;
use seedverify_core::error::DeviceError;
use seedverify_core::wordlist::word_at;
use seedverify_core::{DeviceDeriver, Node};

pub const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon abandon about";

pub const LEGAL_WINNER: &str = "legal winner thank year wave sausage worth useful \
                                legal winner thank yellow";

pub const ZOO_VOTE: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
                            zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote";

/// 24 words, longer than 128 bytes, so seed stretching prehashes it.
pub const LONG_24: &str = "abstract accident acoustic announce artefact attitude bachelor broccoli \
                           business category champion cinnamon congress consider convince cupboard \
                           daughter december decorate decrease describe dinosaur disagree begin";

/// A phrase with its node at `m/6516080'`, as hex private key and chain code.
pub struct CompareVector {
    pub phrase: &'static str,
    pub private_key: &'static str,
    pub chain_code: &'static str,
}

pub const COMPARE_VECTORS: [CompareVector; 4] = [
    CompareVector {
        phrase: ABANDON_ABOUT,
        private_key: "bf1f89841f4eb5550e6ddda35d9e24fe70ad615b1297af4f56c4a6f0ba6253da",
        chain_code: "c154b59ac95fe8942d774c7eb48481b3b1278ac4dbe1e92f56257d52f35ca089",
    },
    CompareVector {
        phrase: LEGAL_WINNER,
        private_key: "731be5ab39b8be464c6a7c98881ba3ed586587d61eae370e5ad94f9bf87d9cab",
        chain_code: "705442ec70ebb56b8f2f1536c3b967b65d34b445896bb385136b287c87c12b37",
    },
    CompareVector {
        phrase: ZOO_VOTE,
        private_key: "b069801159183d321a79bd39d0a845bfc0e6c3dfc733568daddcdaf5e00d59c0",
        chain_code: "03d39dd26ea84909e9717c0a07dfaeab4deb94e6bbd1243c052ceff9c8cfdfa2",
    },
    CompareVector {
        phrase: LONG_24,
        private_key: "aa53cf70c010f249cc45b122a21bd878bb003a9063d58243842c1964dc16b482",
        chain_code: "b09a375bdeb3ee2668163223d19b3a4a29684f230dfb7abc8fedc2b77ef156ee",
    },
];

impl CompareVector {
    pub fn node(&self) -> Node {
        node_from_hex(self.private_key, self.chain_code)
    }
}

/// Build a node from hex key and chain code. Panics on malformed input.
pub fn node_from_hex(private_key: &str, chain_code: &str) -> Node {
    let decode = |s: &str| -> [u8; 32] {
        let bytes = hex::decode(s).expect("valid hex");
        bytes.try_into().expect("32 bytes")
    };
    Node::new(decode(private_key), decode(chain_code))
}

/// Join word indices into a space-delimited phrase.
pub fn phrase_from_indices(indices: &[u16]) -> String {
    indices
        .iter()
        .map(|&i| word_at(i as usize).expect("index in range"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace the word at `position` with `word`.
pub fn replace_word(phrase: &str, position: usize, word: &str) -> String {
    phrase
        .split(' ')
        .enumerate()
        .map(|(i, w)| if i == position { word } else { w })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Device stub answering every request with a fixed node and counting calls.
pub struct FixedDevice {
    node: Node,
    calls: Cell<usize>,
}

impl FixedDevice {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DeviceDeriver for FixedDevice {
    fn derive_node(&self, path: &[u32]) -> Result<Node, DeviceError> {
        assert_eq!(path, &[COMPARE_PATH], "comparison must use the fixed path");
        self.calls.set(self.calls.get() + 1);
        Ok(self.node.clone())
    }
}
