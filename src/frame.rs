//! Byte twiddling utilities, converting between arbitrary `[u8]`
//! buffers and sequences of `Block`.
//!
//! The padding is plain zero-fill with no length marker, so whoever
//! frames a buffer has to hang on to the original length to get the
//! same bytes back out.

use super::Block;

const BLOCK_BYTES: usize = 8;

/// Interprets an 8-byte chunk as a `Block`, each word big-endian.
fn read_block(chunk: &[u8]) -> Block {
    debug_assert_eq!(chunk.len(), BLOCK_BYTES);
    let mut l = [0u8; 4];
    let mut r = [0u8; 4];
    l.copy_from_slice(&chunk[..4]);
    r.copy_from_slice(&chunk[4..]);
    [u32::from_be_bytes(l), u32::from_be_bytes(r)]
}

/// Serializes a `Block` back to its 8 big-endian bytes.
fn write_block(block: &Block) -> [u8; 8] {
    let mut out = [0u8; BLOCK_BYTES];
    out[..4].copy_from_slice(&block[0].to_be_bytes());
    out[4..].copy_from_slice(&block[1].to_be_bytes());
    out
}

/// Number of zero bytes `to_blocks` will append to a buffer of `len`
/// bytes.
pub fn padding_len(len: usize) -> usize {
    (BLOCK_BYTES - len % BLOCK_BYTES) % BLOCK_BYTES
}

/// Splits `buf` into blocks, zero-padding the tail, and returns them
/// along with the original length.
///
/// # Example:
/// ```
/// use teamodes::frame;
///
/// let (blocks, len) = frame::to_blocks(&[1, 2, 3, 4, 5]);
/// assert_eq!(blocks, vec![[0x01020304, 0x05000000]]);
/// assert_eq!(len, 5);
/// ```
pub fn to_blocks(buf: &[u8]) -> (Vec<Block>, usize) {
    let mut blocks = Vec::with_capacity((buf.len() + padding_len(buf.len())) / BLOCK_BYTES);
    for chunk in buf.chunks(BLOCK_BYTES) {
        if chunk.len() == BLOCK_BYTES {
            blocks.push(read_block(chunk));
        } else {
            let mut padded = [0u8; BLOCK_BYTES];
            padded[..chunk.len()].copy_from_slice(chunk);
            blocks.push(read_block(&padded));
        }
    }
    (blocks, buf.len())
}

/// Concatenates `blocks` back into bytes and cuts the result down to
/// `original_len`.  Asking for more bytes than the blocks hold just
/// gets you all of them.
///
/// # Example:
/// ```
/// use teamodes::frame;
///
/// let (blocks, len) = frame::to_blocks(b"Hello, world!");
/// assert_eq!(frame::from_blocks(&blocks, len), b"Hello, world!");
/// ```
pub fn from_blocks(blocks: &[Block], original_len: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(blocks.len() * BLOCK_BYTES);
    for block in blocks {
        buf.extend_from_slice(&write_block(block));
    }
    buf.truncate(original_len);
    buf
}
