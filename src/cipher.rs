//! Implements the basic TEA cipher routines as described in the
//! paper (http://en.wikipedia.org/wiki/Tiny_Encryption_Algorithm).
//! These functions only deal with a single 64-bit block of data at a
//! time.

use super::{Block, Key, Word};
use crate::word::{add, shl, shr, sub};

const NUM_ROUNDS: u32 = 32;
const DELTA: Word = 0x9E37_79B9;

// DELTA added NUM_ROUNDS times, i.e. DELTA << 5 mod 2^32.
const DECRYPT_SUM: Word = DELTA << 5;

/// The Feistel mixing function, shared by both halves of a round.
#[inline]
fn mix(v: Word, sum: Word, k0: Word, k1: Word) -> Word {
    add(shl(v, 4), k0) ^ add(v, sum) ^ add(shr(v, 5), k1)
}

/// Encrypts 64 bits of `input` using the `key`.
///
/// # Example:
/// ```
/// use teamodes::cipher;
///
/// let key = [5, 6, 7, 8];
/// let plaintext = [128, 256];
/// assert!(cipher::encrypt_block(&key, &plaintext) != plaintext);
/// ```
pub fn encrypt_block(key: &Key, input: &Block) -> Block {
    let [mut l, mut r] = *input;
    let mut sum: Word = 0;
    for _ in 0..NUM_ROUNDS {
        sum = add(sum, DELTA);
        l = add(l, mix(r, sum, key[0], key[1]));
        r = add(r, mix(l, sum, key[2], key[3]));
    }
    [l, r]
}

/// Decrypts 64 bits of `input` using the `key`.
///
/// # Example:
/// ```
/// use teamodes::cipher;
///
/// let key = [5, 6, 7, 8];
/// let plaintext = [128, 256];
/// let crypted = cipher::encrypt_block(&key, &plaintext);
/// assert_eq!(cipher::decrypt_block(&key, &crypted), plaintext);
/// ```
pub fn decrypt_block(key: &Key, input: &Block) -> Block {
    let [mut l, mut r] = *input;
    let mut sum = DECRYPT_SUM;
    for _ in 0..NUM_ROUNDS {
        r = sub(r, mix(l, sum, key[2], key[3]));
        l = sub(l, mix(r, sum, key[0], key[1]));
        sum = sub(sum, DELTA);
    }
    [l, r]
}
