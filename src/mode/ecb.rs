//! Electronic codebook: every block goes through the cipher on its
//! own.  Equal plaintext blocks come out as equal ciphertext blocks,
//! which is exactly the leak ECB is famous for.

use crate::{cipher, Block, Key};

/// Encrypts each of `blocks` independently under `key`.
pub fn encrypt(key: &Key, blocks: &[Block]) -> Vec<Block> {
    blocks.iter().map(|block| cipher::encrypt_block(key, block)).collect()
}

/// Decrypts each of `blocks` independently under `key`.
pub fn decrypt(key: &Key, blocks: &[Block]) -> Vec<Block> {
    blocks.iter().map(|block| cipher::decrypt_block(key, block)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: Key = [1, 2, 3, 4];

    #[test]
    fn it_works() {
        let input: Vec<Block> = (0u32..32).map(|i| [i, i.wrapping_mul(0x0101_0101)]).collect();
        let crypted = encrypt(&KEY, &input);
        assert_eq!(crypted.len(), input.len());
        assert!(crypted != input);
        assert_eq!(decrypt(&KEY, &crypted), input);
    }

    #[test]
    fn blocks_are_independent() {
        let input = [[1, 2], [3, 4], [5, 6]];
        let crypted = encrypt(&KEY, &input);
        for (block, crypted_block) in input.iter().zip(crypted.iter()) {
            assert_eq!(cipher::encrypt_block(&KEY, block), *crypted_block);
        }
    }

    #[test]
    fn equal_plaintext_blocks_leak() {
        let crypted = encrypt(&KEY, &[[0xAB, 0xCD], [0, 0], [0xAB, 0xCD]]);
        assert_eq!(crypted[0], crypted[2]);
        assert_ne!(crypted[0], crypted[1]);
    }

    #[test]
    fn empty() {
        assert!(encrypt(&KEY, &[]).is_empty());
        assert!(decrypt(&KEY, &[]).is_empty());
    }
}
