//! 32-bit word arithmetic.  Everything wraps mod 2^32 and the shifts
//! are logical, which is what `u32` gives us for free; these just give
//! the round function names that read like the paper.

use super::Word;

#[inline]
pub fn add(a: Word, b: Word) -> Word {
    a.wrapping_add(b)
}

#[inline]
pub fn sub(a: Word, b: Word) -> Word {
    a.wrapping_sub(b)
}

/// Shifts left by `n` bits, dropping whatever falls off the top.
#[inline]
pub fn shl(a: Word, n: u32) -> Word {
    a << n
}

/// Logical right shift, zeroes come in from the top.
#[inline]
pub fn shr(a: Word, n: u32) -> Word {
    a >> n
}
