//! Complement and shift operations.
//!
//! Shifts are named after the direction the bits travel. Both operate on
//! whole words and treat the backing store as one long little-endian
//! integer, so bit `i` of word `k` is sequence index `k * W::BITS + i`:
//!
//! - [`shift_toward_index_zero`](BitSequence::shift_toward_index_zero) moves
//!   bit `i + offset` to `i` (a right shift of that integer).
//! - [`shift_toward_high_index`](BitSequence::shift_toward_high_index) moves
//!   bit `i` to `i + offset` (a left shift of that integer).
//!
//! Vacated positions are filled with zeros and bits pushed past `len()` are
//! dropped.

use std::ops::Not;

use crate::bit_sequence::BitSequence;
use crate::error::{BitSeqError, Result};
use crate::word::BitWord;

impl<W: BitWord> BitSequence<W> {
    #[inline]
    fn require_words(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(BitSeqError::InvalidState("sequence has no backing words"));
        }
        Ok(())
    }

    /// Toggle all bits (binary NOT operation).
    pub fn toggle_all(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_tail();
    }

    /// Move every bit `offset` places toward index 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::InvalidState`] if the sequence owns no words.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let mut seq: BitSequence = "0011".parse().unwrap();
    /// seq.shift_toward_index_zero(1).unwrap();
    /// assert_eq!(seq.to_string(), "0110");
    /// ```
    pub fn shift_toward_index_zero(&mut self, offset: usize) -> Result<()> {
        self.require_words()?;
        if offset == 0 {
            return Ok(());
        }

        let n = self.words.len();
        let word_shift = offset / W::BITS;
        let bit_shift = offset % W::BITS;
        let at = |words: &[W], k: usize| if k < n { words[k] } else { W::ZERO };

        // Ascending: each word only reads from itself or higher words.
        for i in 0..n {
            let lo = at(&self.words, i.saturating_add(word_shift));
            self.words[i] = if bit_shift == 0 {
                lo
            } else {
                let hi = at(&self.words, i.saturating_add(word_shift + 1));
                (lo >> bit_shift) | (hi << (W::BITS - bit_shift))
            };
        }
        self.clear_tail();
        Ok(())
    }

    /// Move every bit `offset` places toward the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::InvalidState`] if the sequence owns no words.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let mut seq: BitSequence = "1100".parse().unwrap();
    /// seq.shift_toward_high_index(1).unwrap();
    /// assert_eq!(seq.to_string(), "0110");
    /// ```
    pub fn shift_toward_high_index(&mut self, offset: usize) -> Result<()> {
        self.require_words()?;
        if offset == 0 {
            return Ok(());
        }

        let word_shift = offset / W::BITS;
        let bit_shift = offset % W::BITS;

        // Descending: each word only reads from itself or lower words.
        for i in (0..self.words.len()).rev() {
            let lo = if i >= word_shift {
                self.words[i - word_shift]
            } else {
                W::ZERO
            };
            self.words[i] = if bit_shift == 0 {
                lo
            } else {
                let carry = if i > word_shift {
                    self.words[i - word_shift - 1]
                } else {
                    W::ZERO
                };
                (lo << bit_shift) | (carry >> (W::BITS - bit_shift))
            };
        }
        self.clear_tail();
        Ok(())
    }

    /// Copy of the sequence with every bit moved `offset` places toward index 0.
    pub fn shifted_toward_index_zero(&self, offset: usize) -> Result<Self> {
        let mut out = self.clone();
        out.shift_toward_index_zero(offset)?;
        Ok(out)
    }

    /// Copy of the sequence with every bit moved `offset` places toward the end.
    pub fn shifted_toward_high_index(&self, offset: usize) -> Result<Self> {
        let mut out = self.clone();
        out.shift_toward_high_index(offset)?;
        Ok(out)
    }
}

impl<W: BitWord> Not for BitSequence<W> {
    type Output = BitSequence<W>;

    fn not(mut self) -> Self::Output {
        self.toggle_all();
        self
    }
}

impl<W: BitWord> Not for &BitSequence<W> {
    type Output = BitSequence<W>;

    fn not(self) -> Self::Output {
        let mut out = BitSequence {
            words: self.words.iter().map(|&w| !w).collect(),
            num_bits: self.num_bits,
        };
        out.clear_tail();
        out
    }
}
