//! Bundles the `cipher` module into ECB and CBC chaining modes over
//! sequences of blocks, plus helpers that do the framing too so
//! callers can go straight from bytes to bytes.
//!
//! # Example:
//! ```
//! use teamodes::Mode;
//!
//! let key = [1, 2, 3, 4];
//! let mode = Mode::Cbc([5, 6]);
//!
//! let crypted = mode.encrypt_bytes(&key, b"Hello, world!");
//! assert_eq!(crypted.len(), 16);
//!
//! let decrypted = mode.decrypt_bytes(&key, &crypted, 13).unwrap();
//! assert_eq!(decrypted, b"Hello, world!");
//! ```

use std::fmt;

use tracing::debug;

use crate::{frame, Block, Error, Iv, Key, Result};

pub mod cbc;
pub mod ecb;

/// A chaining mode.  CBC carries its IV, ECB has nothing to carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc(Iv),
}

impl Mode {
    pub fn encrypt(&self, key: &Key, blocks: &[Block]) -> Vec<Block> {
        match self {
            Mode::Ecb => ecb::encrypt(key, blocks),
            Mode::Cbc(iv) => cbc::encrypt(key, iv, blocks),
        }
    }

    pub fn decrypt(&self, key: &Key, blocks: &[Block]) -> Vec<Block> {
        match self {
            Mode::Ecb => ecb::decrypt(key, blocks),
            Mode::Cbc(iv) => cbc::decrypt(key, iv, blocks),
        }
    }

    /// Frames `plaintext`, encrypts it, and returns every ciphertext
    /// byte including the padded tail.  The caller needs to remember
    /// `plaintext.len()` to decrypt it again.
    pub fn encrypt_bytes(&self, key: &Key, plaintext: &[u8]) -> Vec<u8> {
        let (blocks, len) = frame::to_blocks(plaintext);
        debug!(mode = %self, bytes = len, blocks = blocks.len(), padding = frame::padding_len(len), "encrypting");
        let crypted = self.encrypt(key, &blocks);
        frame::from_blocks(&crypted, crypted.len() * 8)
    }

    /// Decrypts a whole-block `ciphertext` and truncates the result to
    /// `original_len` bytes.
    pub fn decrypt_bytes(&self, key: &Key, ciphertext: &[u8], original_len: usize) -> Result<Vec<u8>> {
        if ciphertext.len() % 8 != 0 {
            return Err(Error::RaggedCiphertext { len: ciphertext.len() });
        }
        let (blocks, _) = frame::to_blocks(ciphertext);
        debug!(mode = %self, blocks = blocks.len(), original_len, "decrypting");
        Ok(frame::from_blocks(&self.decrypt(key, &blocks), original_len))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => f.write_str("ECB"),
            Mode::Cbc(_) => f.write_str("CBC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: Key = [0x1234_5678, 0x1234_5678, 0x99AA_BBCC, 0x99AA_BBCC];

    #[test]
    fn it_works() {
        for mode in [Mode::Ecb, Mode::Cbc([0x1111_1111, 0x2222_2222])] {
            for len in 0..40 {
                let input: Vec<u8> = (0..len as u8).collect();
                let crypted = mode.encrypt_bytes(&KEY, &input);
                assert_eq!(crypted.len(), len + frame::padding_len(len));
                let decrypted = mode.decrypt_bytes(&KEY, &crypted, len).unwrap();
                assert_eq!(decrypted, input);
            }
        }
    }

    #[test]
    fn dispatches_to_the_right_mode() {
        let blocks = [[1, 2], [3, 4]];
        assert_eq!(Mode::Ecb.encrypt(&KEY, &blocks), ecb::encrypt(&KEY, &blocks));
        assert_eq!(Mode::Cbc([9, 9]).encrypt(&KEY, &blocks), cbc::encrypt(&KEY, &[9, 9], &blocks));
        assert_eq!(Mode::Cbc([0, 0]).encrypt(&KEY, &blocks[..1]), ecb::encrypt(&KEY, &blocks[..1]));
    }

    #[test]
    fn rejects_ragged_ciphertext() {
        match Mode::Ecb.decrypt_bytes(&KEY, &[0u8; 9], 9) {
            Err(Error::RaggedCiphertext { len }) => assert_eq!(len, 9),
            other => panic!("expected ragged ciphertext error, got {:?}", other),
        }
    }

    #[test]
    fn display() {
        assert_eq!(Mode::Ecb.to_string(), "ECB");
        assert_eq!(Mode::Cbc([0, 0]).to_string(), "CBC");
    }
}
