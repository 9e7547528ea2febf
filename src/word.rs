//! Word abstraction for packed bit storage.
//!
//! A [`BitSequence`](crate::BitSequence) stores its bits in a `Vec` of
//! fixed-width unsigned words. [`BitWord`] captures what the storage layer
//! needs from such a word and is implemented for every unsigned primitive.
//!
//! Bit `pos` of a sequence lives in word `pos / BITS`, at offset
//! `pos % BITS` counted from the least significant bit.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign,
};

/// Default word type for bit storage (32-bit unsigned integer)
pub type Word = u32;

/// Number of bits per default word
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// An unsigned primitive usable as a storage word.
pub trait BitWord
where
    Self: Sized + Copy + Eq + Hash + Debug + Default,
    Self: Not<Output = Self>,
    Self: BitAnd<Output = Self> + BitAndAssign,
    Self: BitOr<Output = Self> + BitOrAssign,
    Self: BitXorAssign,
    Self: Shl<usize, Output = Self> + ShlAssign<usize>,
    Self: Shr<usize, Output = Self> + ShrAssign<usize>,
{
    /// Width of the word in bits
    const BITS: usize;
    /// All bits cleared
    const ZERO: Self;
    /// Only the least significant bit set
    const ONE: Self;
    /// All bits set
    const MAX: Self;

    /// Population count.
    fn count_ones(self) -> u32;
}

macro_rules! impl_bit_word {
    ($($type:ty),*) => {
        $(
            impl BitWord for $type {
                const BITS: usize = <$type>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$type>::MAX;

                #[inline(always)]
                fn count_ones(self) -> u32 {
                    <$type>::count_ones(self)
                }
            }
        )*
    };
}

impl_bit_word!(u8, u16, u32, u64, u128, usize);

/// Get word index from bit position
#[inline(always)]
pub(crate) const fn word_idx<W: BitWord>(bit_pos: usize) -> usize {
    bit_pos / W::BITS
}

/// Get bit index within word from bit position
#[inline(always)]
pub(crate) const fn bit_idx<W: BitWord>(bit_pos: usize) -> usize {
    bit_pos % W::BITS
}

/// Number of words needed to hold `n` bits
#[inline(always)]
pub(crate) const fn words_for_bits<W: BitWord>(n: usize) -> usize {
    n.div_ceil(W::BITS)
}

/// Create bitmask with n bits set (from LSB)
#[inline(always)]
pub(crate) fn low_mask<W: BitWord>(n: usize) -> W {
    if n == 0 {
        W::ZERO
    } else if n >= W::BITS {
        W::MAX
    } else {
        W::MAX >> (W::BITS - n)
    }
}
