//! Key fingerprints: identify a key in logs and reports without echoing it.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Digest bytes kept in a fingerprint (16 hex digits).
const FINGERPRINT_BYTES: usize = 8;

/// Leading hex digits of the SHA-256 of the key residues, one byte per residue.
pub fn key_fingerprint(residues: &[usize]) -> String {
    // residues are below the alphabet length, so each fits in a byte
    let mut bytes: Vec<u8> = residues.iter().map(|&r| r as u8).collect();
    let digest = Sha256::digest(&bytes);
    bytes.zeroize();
    digest[..FINGERPRINT_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::key_fingerprint;
    use hex::ToHex;
    use sha2::{Digest, Sha256};

    #[test]
    fn matches_known_sha256_prefix() {
        // SHA-256 of the single byte 0x00
        assert_eq!(key_fingerprint(&[0]), "6e340b9cffb37a98");
    }

    #[test]
    fn fingerprints_are_short_and_stable() {
        let first = key_fingerprint(&[11, 12, 31, 24]);
        assert_eq!(first.len(), 16);
        assert_eq!(first, key_fingerprint(&[11, 12, 31, 24]));
        assert_ne!(first, key_fingerprint(&[11, 12, 31, 25]));
        let full: String = Sha256::digest([11u8, 12, 31, 24]).encode_hex();
        assert!(full.starts_with(&first));
    }
}
