//! BIP-32 master node generation and hardened child derivation on secp256k1.
//!
//! Only hardened children are derived: the HMAC message mixes in the parent
//! private key, so no public-key arithmetic is needed. When a candidate child
//! key is out of range (`I_L >= n`) or sums to zero with the parent key, the
//! derivation retries with `0x01 ‖ I_R ‖ ser32(index)` under the same chain
//! code until a valid key comes out.

use hmac::{Hmac, Mac};
use secp256k1::{Scalar, SecretKey};
use sha2::Sha512;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use seedverify_core::Node;
use seedverify_core::constants::{BIP32_SEED_KEY, HARDENED_OFFSET, MAX_DERIVE_ATTEMPTS};
use seedverify_core::error::DeriveError;

use crate::seed::Seed;

type HmacSha512 = Hmac<Sha512>;

/// Length of a hardened derivation message: prefix, key, index.
const MESSAGE_LEN: usize = 1 + 32 + 4;

fn hmac_sha512(key: &[u8], message: &[u8]) -> Result<Zeroizing<[u8; 64]>, DeriveError> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| DeriveError::HmacKey)?;
    mac.update(message);
    let mut out = Zeroizing::new([0u8; 64]);
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// `prefix ‖ key ‖ ser32(index)`.
fn child_message(prefix: u8, key: &[u8], index: u32) -> Zeroizing<[u8; MESSAGE_LEN]> {
    let mut message = Zeroizing::new([0u8; MESSAGE_LEN]);
    message[0] = prefix;
    message[1..33].copy_from_slice(key);
    message[33..].copy_from_slice(&index.to_be_bytes());
    message
}

/// Result of checking one HMAC output.
enum Attempt {
    /// Candidate rejected; HMAC this message next.
    Retry(Zeroizing<[u8; MESSAGE_LEN]>),
    Accepted(Node),
}

/// Turn one HMAC output into either the child node or the next message.
fn evaluate(parent: &SecretKey, index: u32, output: &[u8; 64]) -> Attempt {
    let mut il = Zeroizing::new([0u8; 32]);
    il.copy_from_slice(&output[..32]);
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&output[32..]);

    let child = Scalar::from_be_bytes(*il)
        .ok()
        .and_then(|tweak| parent.add_tweak(&tweak).ok());
    match child {
        Some(mut key) => {
            let node = Node::new(key.secret_bytes(), chain_code);
            key.non_secure_erase();
            Attempt::Accepted(node)
        }
        None => Attempt::Retry(child_message(0x01, &chain_code, index)),
    }
}

/// Master node: `HMAC-SHA512("Bitcoin seed", seed)` split into key and chain code.
pub fn master_node(seed: &Seed) -> Result<Node, DeriveError> {
    let output = hmac_sha512(BIP32_SEED_KEY, seed.as_bytes())?;
    Ok(Node::from_bytes(&output))
}

/// Derive the hardened child of `parent` at `index`.
pub fn derive_hardened(parent: &Node, index: u32) -> Result<Node, DeriveError> {
    if index < HARDENED_OFFSET {
        return Err(DeriveError::NonHardenedIndex(index));
    }
    let mut parent_key =
        SecretKey::from_slice(parent.private_key()).map_err(|_| DeriveError::InvalidParentKey)?;

    let mut message = child_message(0x00, parent.private_key(), index);
    let mut result = Err(DeriveError::RetryLimit(MAX_DERIVE_ATTEMPTS));
    for attempt in 0..MAX_DERIVE_ATTEMPTS {
        let output = hmac_sha512(parent.chain_code(), &message[..])?;
        match evaluate(&parent_key, index, &output) {
            Attempt::Accepted(node) => {
                if attempt > 0 {
                    debug!(index, attempts = attempt + 1, "bip32: child accepted after retry");
                }
                result = Ok(node);
                break;
            }
            Attempt::Retry(next) => {
                warn!(index, attempt, "bip32: candidate child key invalid, retrying");
                message = next;
            }
        }
    }
    parent_key.non_secure_erase();
    result
}

/// Walk a path of hardened indices down from `master`.
pub fn derive_path(master: &Node, path: &[u32]) -> Result<Node, DeriveError> {
    path.iter()
        .try_fold(master.clone(), |node, &index| derive_hardened(&node, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::constants::CURVE_ORDER;
    use seedverify_core::Phrase;
    use seedverify_core::constants::COMPARE_PATH;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn hex32(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    fn key_of(value: u8) -> SecretKey {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        SecretKey::from_slice(&bytes).unwrap()
    }

    fn output_with(il: [u8; 32], ir: [u8; 32]) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&il);
        out[32..].copy_from_slice(&ir);
        out
    }

    #[test]
    fn master_from_abandon_about() {
        let seed = Seed::from_phrase(Phrase::from(ABANDON_ABOUT));
        let master = master_node(&seed).unwrap();
        assert_eq!(
            master.private_key(),
            &hex32("1837c1be8e2995ec11cda2b066151be2cfb48adf9e47b151d46adab3a21cdf67")
        );
        assert_eq!(
            master.chain_code(),
            &hex32("7923408dadd3c7b56eed15567707ae5e5dca089de972e07f3b860450e2a3b70e")
        );
    }

    #[test]
    fn compare_path_child_from_abandon_about() {
        let seed = Seed::from_phrase(Phrase::from(ABANDON_ABOUT));
        let master = master_node(&seed).unwrap();
        let child = derive_hardened(&master, COMPARE_PATH).unwrap();
        assert_eq!(
            child.private_key(),
            &hex32("bf1f89841f4eb5550e6ddda35d9e24fe70ad615b1297af4f56c4a6f0ba6253da")
        );
        assert_eq!(
            child.chain_code(),
            &hex32("c154b59ac95fe8942d774c7eb48481b3b1278ac4dbe1e92f56257d52f35ca089")
        );
    }

    #[test]
    fn message_layout() {
        let msg = child_message(0x00, &[0x11; 32], COMPARE_PATH);
        assert_eq!(msg[0], 0x00);
        assert_eq!(&msg[1..33], &[0x11; 32]);
        assert_eq!(&msg[33..], &[0x80, 0x63, 0x6D, 0x70]);
    }

    #[test]
    fn accepted_candidate_adds_parent() {
        let output = output_with(hex32(&format!("{:064x}", 5)), [0x22; 32]);
        match evaluate(&key_of(7), COMPARE_PATH, &output) {
            Attempt::Accepted(node) => {
                assert_eq!(node.private_key(), &hex32(&format!("{:064x}", 12)));
                assert_eq!(node.chain_code(), &[0x22; 32]);
            }
            Attempt::Retry(_) => panic!("valid candidate rejected"),
        }
    }

    #[test]
    fn sum_wraps_modulo_order() {
        // (n - 1) + 3 = 2 mod n
        let mut il = CURVE_ORDER;
        il[31] -= 1;
        match evaluate(&key_of(3), COMPARE_PATH, &output_with(il, [0; 32])) {
            Attempt::Accepted(node) => assert_eq!(node.private_key(), &hex32(&format!("{:064x}", 2))),
            Attempt::Retry(_) => panic!("valid candidate rejected"),
        }
    }

    #[test]
    fn candidate_at_or_above_order_retries() {
        for il in [CURVE_ORDER, [0xFF; 32]] {
            match evaluate(&key_of(1), COMPARE_PATH, &output_with(il, [0x33; 32])) {
                Attempt::Retry(msg) => {
                    assert_eq!(msg[0], 0x01);
                    assert_eq!(&msg[1..33], &[0x33; 32]);
                    assert_eq!(&msg[33..], &COMPARE_PATH.to_be_bytes());
                }
                Attempt::Accepted(_) => panic!("overflowing candidate accepted"),
            }
        }
    }

    #[test]
    fn zero_sum_retries() {
        // parent 1, candidate n - 1: sum is 0 mod n
        let mut il = CURVE_ORDER;
        il[31] -= 1;
        match evaluate(&key_of(1), COMPARE_PATH, &output_with(il, [0x44; 32])) {
            Attempt::Retry(msg) => assert_eq!(&msg[1..33], &[0x44; 32]),
            Attempt::Accepted(_) => panic!("zero child key accepted"),
        }
    }

    #[test]
    fn non_hardened_rejected() {
        let master = Node::new(hex32(&format!("{:064x}", 1)), [0; 32]);
        assert_eq!(
            derive_hardened(&master, 44).err(),
            Some(DeriveError::NonHardenedIndex(44))
        );
    }

    #[test]
    fn invalid_parent_rejected() {
        let zero = Node::new([0; 32], [0; 32]);
        assert_eq!(
            derive_hardened(&zero, COMPARE_PATH).err(),
            Some(DeriveError::InvalidParentKey)
        );
        let over = Node::new(CURVE_ORDER, [0; 32]);
        assert_eq!(
            derive_hardened(&over, COMPARE_PATH).err(),
            Some(DeriveError::InvalidParentKey)
        );
    }

    #[test]
    fn path_matches_single_step() {
        let seed = Seed::from_phrase(Phrase::from(ABANDON_ABOUT));
        let master = master_node(&seed).unwrap();
        let one = derive_hardened(&master, COMPARE_PATH).unwrap();
        assert_eq!(derive_path(&master, &[COMPARE_PATH]).unwrap(), one);
        assert_eq!(derive_path(&master, &[]).unwrap(), master);
    }

    #[test]
    fn path_stops_at_first_error() {
        let seed = Seed::from_phrase(Phrase::from(ABANDON_ABOUT));
        let master = master_node(&seed).unwrap();
        assert_eq!(
            derive_path(&master, &[COMPARE_PATH, 0, HARDENED_OFFSET]).err(),
            Some(DeriveError::NonHardenedIndex(0))
        );
    }
}
