//! Modified-alphabet cipher over the 33-letter Russian alphabet.
//! A keyword becomes a repeating sequence of residues that is added to (or
//! subtracted from) the text letter by letter, modulo the alphabet length.
//!
//! ```
//! use modalpha::Cipher;
//!
//! let cipher = Cipher::new("б").unwrap();
//! assert_eq!(cipher.encrypt("Я").unwrap(), "А");
//! assert_eq!(cipher.decrypt("А").unwrap(), "Я");
//! ```

pub mod cipher;
pub mod config;
pub mod session;

pub use cipher::{Cipher, CipherError, CipherErrorKind};
