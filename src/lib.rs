//! Implements the TEA block cipher, whose reference source is public
//! domain.  This code is also public domain.
//!
//! Also implements ECB and CBC chaining over arbitrary byte buffers,
//! which get zero-padded up to a whole number of blocks.  There is no
//! authentication, the padding is not removable without knowing the
//! original length, and nothing here is constant-time.  I'm not good
//! at crypto so don't use this.

/// TEA does all of its arithmetic on 32-bit words, wrapping mod 2^32.
pub type Word = u32;

/// A key is 128 bits.  We don't seem to need SIMD anywhere so it's
/// just an array.  TEA has no key schedule, the four words are used
/// directly.
pub type Key = [Word; 4];

/// TEA uses 64-bit blocks; for simplicity and to match the reference
/// source, we use an array here too.  `[L, R]`, each word big-endian
/// on the wire.
pub type Block = [Word; 2];

/// The CBC initialization vector has the same shape as a block.
pub type Iv = Block;

pub mod cipher;
pub mod demo;
pub mod frame;
pub mod mode;
pub mod params;
pub mod word;
mod error;

pub use error::{Error, Result};
pub use mode::Mode;
