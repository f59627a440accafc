//! Cipher engine and the pieces it is built from. The alphabet tables, the
//! error type and key fingerprinting live in their own submodules so the
//! engine itself only deals with validation and modular arithmetic.

pub mod alphabet;
pub mod engine;
pub mod error;
pub mod fingerprint;

pub use engine::Cipher;
pub use error::{CipherError, CipherErrorKind};
