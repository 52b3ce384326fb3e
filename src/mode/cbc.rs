//! Cipher block chaining.  Each plaintext block is XORed with the
//! previous ciphertext block (the IV for the first one) before it's
//! encrypted, so the whole thing is strictly sequential.

use crate::{cipher, Block, Iv, Key};

fn xor(a: &Block, b: &Block) -> Block {
    [a[0] ^ b[0], a[1] ^ b[1]]
}

fn encrypt_chunk(key: &Key, prev: &mut Block, input: &Block) -> Block {
    *prev = cipher::encrypt_block(key, &xor(input, prev));
    *prev
}

fn decrypt_chunk(key: &Key, prev: &mut Block, input: &Block) -> Block {
    let decrypted_block = xor(&cipher::decrypt_block(key, input), prev);
    // The chain carries the ciphertext we were handed, not what it
    // decrypted to.
    *prev = *input;
    decrypted_block
}

/// Encrypts `blocks` under `key`, chaining from `iv`.
///
/// # Example:
/// ```
/// use teamodes::mode::cbc;
///
/// let blocks = [[7, 7], [7, 7]];
/// let crypted = cbc::encrypt(&[1, 2, 3, 4], &[5, 6], &blocks);
/// assert!(crypted[0] != crypted[1]);
/// assert_eq!(cbc::decrypt(&[1, 2, 3, 4], &[5, 6], &crypted), blocks);
/// ```
pub fn encrypt(key: &Key, iv: &Iv, blocks: &[Block]) -> Vec<Block> {
    let mut prev = *iv;
    blocks.iter().map(|block| encrypt_chunk(key, &mut prev, block)).collect()
}

/// Decrypts `blocks` under `key`, chaining from `iv`.
pub fn decrypt(key: &Key, iv: &Iv, blocks: &[Block]) -> Vec<Block> {
    let mut prev = *iv;
    blocks.iter().map(|block| decrypt_chunk(key, &mut prev, block)).collect()
}
