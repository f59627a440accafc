//! The cipher engine: a validated key plus encrypt/decrypt over validated text.

use std::fmt;

use zeroize::Zeroize;

use super::alphabet::{first_foreign, normalize, to_indices, to_text, MODULUS};
use super::error::CipherError;
use super::fingerprint::key_fingerprint;

/// Modified-alphabet cipher keyed by a keyword.
///
/// The only constructor is [`Cipher::new`], so every instance holds a
/// non-empty key of alphabet residues. Instances are immutable and can be
/// shared across threads.
#[derive(Clone)]
pub struct Cipher {
    key: Vec<usize>,
}

impl Cipher {
    /// Builds a cipher from a keyword of alphabet letters (any case).
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        let keyword = validate_key(keyword)?;
        Ok(Self {
            key: to_indices(&keyword),
        })
    }

    /// Number of residues in the key.
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Short SHA-256 fingerprint of the key, safe to log.
    pub fn fingerprint(&self) -> String {
        key_fingerprint(&self.key)
    }

    /// Encrypts open text. Lowercase input is accepted; the result is uppercase.
    pub fn encrypt(&self, open_text: &str) -> Result<String, CipherError> {
        let open_text = validate_open_text(open_text)?;
        let cipher: Vec<usize> = to_indices(&open_text)
            .into_iter()
            .zip(self.key.iter().cycle())
            .map(|(p, &k)| (p + k) % MODULUS)
            .collect();
        Ok(to_text(&cipher))
    }

    /// Decrypts cipher text produced by [`Cipher::encrypt`] with the same key.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, CipherError> {
        let cipher_text = validate_cipher_text(cipher_text)?;
        let open: Vec<usize> = to_indices(&cipher_text)
            .into_iter()
            .zip(self.key.iter().cycle())
            .map(|(c, &k)| (c + MODULUS - k) % MODULUS)
            .collect();
        Ok(to_text(&open))
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("key_len", &self.key.len())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Normalizes `text` and checks it is a non-empty run of alphabet letters.
fn validate(text: &str, reject: fn(String) -> CipherError) -> Result<String, CipherError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(reject("input is empty".to_string()));
    }
    if let Some((position, letter)) = first_foreign(&normalized) {
        return Err(reject(format!(
            "{letter:?} at position {position} is not in the alphabet"
        )));
    }
    Ok(normalized)
}

fn validate_key(keyword: &str) -> Result<String, CipherError> {
    validate(keyword, CipherError::InvalidKey)
}

fn validate_open_text(text: &str) -> Result<String, CipherError> {
    validate(text, CipherError::InvalidPlainText)
}

fn validate_cipher_text(text: &str) -> Result<String, CipherError> {
    validate(text, CipherError::InvalidCipherText)
}
