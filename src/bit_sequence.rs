//! BitSequence - Resizable bit sequence packed into fixed-width words.
//!
//! This module provides the storage, addressing and structural mutation layers
//! of the crate. Bits are stored in a `Vec<W>` of words alongside a logical
//! length that may be smaller than the allocated capacity.
//!
//! # Design
//!
//! - Uses `Vec<W>` for storage (`W: BitWord`, `u32` by default)
//! - Bit indexing: word_idx = bit_idx / W::BITS, bit_offset = bit_idx % W::BITS
//! - Positional insert and erase move bits one at a time, O(n) per call
//! - Storage grows one word at a time and is only reclaimed by
//!   [`BitSequence::shrink_to_fit`]
//! - Bits at or beyond `len()` are always kept cleared
//!
//! # Examples
//!
//! ```
//! use bitseq::BitSequence;
//!
//! let mut seq: BitSequence = "111".parse().unwrap();
//! seq.insert(1, false).unwrap();
//! assert_eq!(seq.to_string(), "1011");
//!
//! seq.erase(1, 1).unwrap();
//! assert_eq!(seq.to_string(), "111");
//! ```

use log::{debug, trace};
use std::iter::FusedIterator;
use std::ops::Index;

use crate::bit_ref::BitMut;
use crate::error::{BitSeqError, Result};
use crate::word::{bit_idx, low_mask, word_idx, words_for_bits, BitWord, Word};

/// Resizable sequence of bits packed into words of type `W`.
///
/// All bit indices are 0-based.
#[derive(Clone, Debug)]
pub struct BitSequence<W: BitWord = Word> {
    /// Storage words
    pub(crate) words: Vec<W>,
    /// Number of logically valid bits
    pub(crate) num_bits: usize,
}

impl BitSequence<Word> {
    /// Create an empty sequence with the default word type.
    #[inline]
    pub fn new() -> Self {
        Self::new_with_word_type()
    }

    /// Create a sequence of `n` bits, all initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let seq = BitSequence::with_len(40);
    /// assert_eq!(seq.len(), 40);
    /// assert_eq!(seq.num_words(), 2);
    /// assert_eq!(seq.count_ones(), 0);
    /// ```
    #[inline]
    pub fn with_len(n: usize) -> Self {
        Self::with_len_and_word_type(n)
    }
}

impl<W: BitWord> BitSequence<W> {
    /// Create an empty sequence backed by words of type `W`.
    #[inline]
    pub fn new_with_word_type() -> Self {
        Self {
            words: Vec::new(),
            num_bits: 0,
        }
    }

    /// Create a sequence of `n` zero bits backed by words of type `W`.
    pub fn with_len_and_word_type(n: usize) -> Self {
        Self {
            words: vec![W::ZERO; words_for_bits::<W>(n)],
            num_bits: n,
        }
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// Unlike a swap, the source keeps neither its bits nor its allocation.
    pub fn take(&mut self) -> Self {
        debug!(
            "transferring {} bits ({} words) out of sequence",
            self.num_bits,
            self.words.len()
        );
        std::mem::take(self)
    }

    // =========================================================================
    // Information and Access
    // =========================================================================

    /// Number of bits in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Returns `true` if the sequence holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Number of bits the current allocation can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * W::BITS
    }

    /// Number of words in storage.
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Read-only access to word storage.
    ///
    /// Bits at or beyond `len()` are always zero.
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Iterate over the bits in index order.
    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            seq: self,
            front: 0,
            back: self.num_bits,
        }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    #[inline]
    fn check_index(&self, pos: usize) -> Result<()> {
        if pos >= self.num_bits {
            return Err(BitSeqError::OutOfRange {
                index: pos,
                length: self.num_bits,
            });
        }
        Ok(())
    }

    /// Unchecked read; `pos` must be below `capacity()`.
    #[inline(always)]
    pub(crate) fn read_raw(&self, pos: usize) -> bool {
        (self.words[word_idx::<W>(pos)] >> bit_idx::<W>(pos)) & W::ONE == W::ONE
    }

    /// Unchecked write; `pos` must be below `capacity()`.
    #[inline(always)]
    pub(crate) fn write_raw(&mut self, pos: usize, val: bool) {
        let mask = W::ONE << bit_idx::<W>(pos);
        let word = &mut self.words[word_idx::<W>(pos)];
        if val {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Get bit at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::OutOfRange`] if `pos >= len()`.
    #[inline]
    pub fn get(&self, pos: usize) -> Result<bool> {
        self.check_index(pos)?;
        Ok(self.read_raw(pos))
    }

    /// Set bit at position `pos` to 1.
    #[inline]
    pub fn set_bit(&mut self, pos: usize) -> Result<()> {
        self.check_index(pos)?;
        self.words[word_idx::<W>(pos)] |= W::ONE << bit_idx::<W>(pos);
        Ok(())
    }

    /// Clear bit at position `pos` (set to 0).
    #[inline]
    pub fn clear_bit(&mut self, pos: usize) -> Result<()> {
        self.check_index(pos)?;
        self.words[word_idx::<W>(pos)] &= !(W::ONE << bit_idx::<W>(pos));
        Ok(())
    }

    /// Toggle bit at position `pos` (0 -> 1, 1 -> 0).
    #[inline]
    pub fn toggle_bit(&mut self, pos: usize) -> Result<()> {
        self.check_index(pos)?;
        self.words[word_idx::<W>(pos)] ^= W::ONE << bit_idx::<W>(pos);
        Ok(())
    }

    /// Assign bit at position `pos` to `val`.
    #[inline]
    pub fn assign_bit(&mut self, pos: usize, val: bool) -> Result<()> {
        self.check_index(pos)?;
        self.write_raw(pos, val);
        Ok(())
    }

    /// Borrow a single bit for reading and writing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let mut seq = BitSequence::with_len(4);
    /// seq.bit_mut(2).unwrap().set(true);
    /// assert_eq!(seq.to_string(), "0010");
    /// ```
    pub fn bit_mut(&mut self, pos: usize) -> Result<BitMut<'_, W>> {
        self.check_index(pos)?;
        Ok(BitMut::new(self, pos))
    }

    // =========================================================================
    // Structural Mutation
    // =========================================================================

    /// Append a bit at the end.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        if self.num_bits == self.capacity() {
            self.words.push(W::ZERO);
        }
        self.write_raw(self.num_bits, bit);
        self.num_bits += 1;
    }

    /// Append every bit of `other`, in order.
    pub fn append(&mut self, other: &BitSequence<W>) {
        for pos in 0..other.num_bits {
            self.push(other.read_raw(pos));
        }
    }

    /// Append a copy of the sequence to itself.
    pub fn append_self(&mut self) {
        let snapshot = self.clone();
        self.append(&snapshot);
    }

    /// Insert a bit at `pos`, moving every later bit one place up.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::OutOfRange`] if `pos > len()`.
    pub fn insert(&mut self, pos: usize, bit: bool) -> Result<()> {
        if pos > self.num_bits {
            return Err(BitSeqError::OutOfRange {
                index: pos,
                length: self.num_bits,
            });
        }
        if self.num_bits == self.capacity() {
            trace!("growing sequence storage to {} words", self.words.len() + 1);
            self.words.push(W::ZERO);
        }

        // Length grows first so the one-past-end slot is addressable.
        self.num_bits += 1;
        for i in (pos + 1..self.num_bits).rev() {
            let prev = self.read_raw(i - 1);
            self.write_raw(i, prev);
        }
        self.write_raw(pos, bit);
        Ok(())
    }

    /// Insert every bit of `other` starting at `pos`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::OutOfRange`] if `pos > len()`; the sequence is
    /// left untouched in that case.
    pub fn insert_seq(&mut self, pos: usize, other: &BitSequence<W>) -> Result<()> {
        if pos > self.num_bits {
            return Err(BitSeqError::OutOfRange {
                index: pos,
                length: self.num_bits,
            });
        }
        for i in 0..other.num_bits {
            self.insert(pos + i, other.read_raw(i))?;
        }
        Ok(())
    }

    /// Remove `nbits` bits starting at `pos`.
    ///
    /// Storage is not released; call [`shrink_to_fit`](Self::shrink_to_fit)
    /// to reclaim it.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::OutOfRange`] if `pos > len()` or the erased
    /// range runs past the end.
    pub fn erase(&mut self, pos: usize, nbits: usize) -> Result<()> {
        if pos > self.num_bits {
            return Err(BitSeqError::OutOfRange {
                index: pos,
                length: self.num_bits,
            });
        }
        let end = match pos.checked_add(nbits) {
            Some(end) if end <= self.num_bits => end,
            _ => {
                return Err(BitSeqError::OutOfRange {
                    index: pos.saturating_add(nbits),
                    length: self.num_bits,
                })
            }
        };

        for src in end..self.num_bits {
            let bit = self.read_raw(src);
            self.write_raw(src - nbits, bit);
        }
        let new_len = self.num_bits - nbits;
        for stale in new_len..self.num_bits {
            self.write_raw(stale, false);
        }
        self.num_bits = new_len;
        Ok(())
    }

    /// Remove the bit at `pos` and return it.
    pub fn remove(&mut self, pos: usize) -> Result<bool> {
        let bit = self.get(pos)?;
        self.erase(pos, 1)?;
        Ok(bit)
    }

    /// Drop all bits, keeping the allocated words.
    pub fn clear(&mut self) {
        self.words.fill(W::ZERO);
        self.num_bits = 0;
    }

    /// Release trailing words that `len()` no longer needs.
    ///
    /// A no-op unless at least one whole word is unused.
    pub fn shrink_to_fit(&mut self) {
        let needed = words_for_bits::<W>(self.num_bits);
        if self.words.len() > needed {
            debug!(
                "shrinking sequence storage from {} to {} words",
                self.words.len(),
                needed
            );
            self.words.truncate(needed);
            self.words.shrink_to_fit();
        } else {
            debug!("sequence storage already minimal ({} words)", needed);
        }
    }

    /// Clear any bits at or beyond `len()` in the last used word.
    #[inline]
    pub(crate) fn clear_tail(&mut self) {
        let used = words_for_bits::<W>(self.num_bits);
        let rem = bit_idx::<W>(self.num_bits);
        if rem != 0 {
            self.words[used - 1] &= low_mask::<W>(rem);
        }
        for word in &mut self.words[used..] {
            *word = W::ZERO;
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Copy `count` bits starting at `pos` into a new sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::OutOfRange`] naming the first index past the
    /// end, if the range does not fit.
    pub fn slice(&self, pos: usize, count: usize) -> Result<Self> {
        let mut out = Self::new_with_word_type();
        for i in 0..count {
            out.push(self.get(pos + i)?);
        }
        Ok(out)
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.num_bits - self.count_ones()
    }

    /// Returns `true` if any bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.words.iter().any(|&w| w != W::ZERO)
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }
}

impl<W: BitWord> Default for BitSequence<W> {
    #[inline]
    fn default() -> Self {
        Self::new_with_word_type()
    }
}

impl<W: BitWord> Index<usize> for BitSequence<W> {
    type Output = bool;

    fn index(&self, pos: usize) -> &Self::Output {
        match self.get(pos) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(_) => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.num_bits, pos
            ),
        }
    }
}

impl<W: BitWord> FromIterator<bool> for BitSequence<W> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut seq = Self::new_with_word_type();
        seq.extend(iter);
        seq
    }
}

impl<W: BitWord> Extend<bool> for BitSequence<W> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl<'a, W: BitWord> IntoIterator for &'a BitSequence<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bits of a [`BitSequence`], index 0 first.
#[derive(Clone, Debug)]
pub struct Iter<'a, W: BitWord> {
    seq: &'a BitSequence<W>,
    front: usize,
    back: usize,
}

impl<W: BitWord> Iterator for Iter<'_, W> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = self.seq.read_raw(self.front);
        self.front += 1;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<W: BitWord> DoubleEndedIterator for Iter<'_, W> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.seq.read_raw(self.back))
    }
}

impl<W: BitWord> ExactSizeIterator for Iter<'_, W> {}

impl<W: BitWord> FusedIterator for Iter<'_, W> {}
