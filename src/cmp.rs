//! Equality and lexicographic ordering.
//!
//! Ordering reads sequences from index 0 onward, so index 0 is the most
//! significant position, a 0 bit sorts before a 1 bit, and a proper prefix
//! sorts before any longer sequence that extends it. Ordering is undefined
//! for empty sequences, so it is exposed through fallible methods rather
//! than `PartialOrd`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::bit_sequence::BitSequence;
use crate::error::{BitSeqError, Result};
use crate::word::BitWord;

impl<W: BitWord> PartialEq for BitSequence<W> {
    /// Compare sequences using word-level slice comparison.
    ///
    /// Trailing storage beyond `len()` is always zero, so only the words that
    /// hold logical bits take part.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.num_bits == other.num_bits && self.used_words() == other.used_words()
    }
}

impl<W: BitWord> Eq for BitSequence<W> {}

impl<W: BitWord> Hash for BitSequence<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_bits.hash(state);
        self.used_words().hash(state);
    }
}

impl<W: BitWord> BitSequence<W> {
    #[inline]
    fn used_words(&self) -> &[W] {
        &self.words[..crate::word::words_for_bits::<W>(self.num_bits)]
    }

    /// Lexicographic comparison, index 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::InvalidState`] if either sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bitseq::BitSequence;
    ///
    /// let a: BitSequence = "011".parse().unwrap();
    /// let b: BitSequence = "1".parse().unwrap();
    /// assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        if self.is_empty() || other.is_empty() {
            return Err(BitSeqError::InvalidState(
                "cannot order an empty sequence",
            ));
        }
        let by_bits = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.cmp(&b))
            .find(|&ord| ord != Ordering::Equal);
        Ok(by_bits.unwrap_or_else(|| self.len().cmp(&other.len())))
    }

    /// `self < other`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::InvalidState`] if either sequence is empty.
    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`.
    ///
    /// Equality is checked first, so two empty sequences compare `true`.
    pub fn try_le(&self, other: &Self) -> Result<bool> {
        if self == other {
            return Ok(true);
        }
        self.try_lt(other)
    }

    /// `self > other`.
    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        Ok(!self.try_le(other)?)
    }

    /// `self >= other`.
    pub fn try_ge(&self, other: &Self) -> Result<bool> {
        Ok(!self.try_lt(other)?)
    }
}
