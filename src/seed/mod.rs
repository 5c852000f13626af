//! Recovery-phrase codec: decodes BIP39 and legacy siad phrases into
//! 32-byte seeds, and encodes legacy seeds back into phrases.

mod bip39_phrase;
mod legacy;
mod wordlist;

pub use bip39_phrase::seed_from_bip39;
pub use legacy::{encode_legacy, decode_legacy};

use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseError {
    #[error("invalid recovery phrase")]
    InvalidPhrase,
    #[error("unknown word: {0}")]
    UnknownWord(String),
}

/// Decode either phrase format into a 32-byte seed. Format is distinguished
/// solely by the whitespace-separated word count: 12 words is BIP39, 28 or
/// 29 words is the legacy siad base-1626 encoding, anything else is
/// rejected.
pub fn decode_phrase(phrase: &str) -> Result<Seed, PhraseError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    match words.len() {
        12 => Ok(Seed(seed_from_bip39(phrase).map_err(|_| PhraseError::InvalidPhrase)?)),
        28 | 29 => Ok(Seed(decode_legacy(&words)?)),
        _ => Err(PhraseError::InvalidPhrase),
    }
}

/// A 32-byte root seed. Zeroized on drop; the plaintext never persists
/// outside a value of this type.
#[derive(Clone)]
pub struct Seed(pub [u8; 32]);

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}
