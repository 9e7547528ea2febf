//! Mutable handle to a single bit.

use std::fmt;

use crate::bit_sequence::BitSequence;
use crate::word::BitWord;

/// Exclusive, bounds-checked reference to one bit of a [`BitSequence`].
///
/// Obtained from [`BitSequence::bit_mut`]. The handle borrows the sequence
/// mutably, so nothing else can observe or change it while the handle lives.
pub struct BitMut<'a, W: BitWord> {
    seq: &'a mut BitSequence<W>,
    pos: usize,
}

impl<'a, W: BitWord> BitMut<'a, W> {
    /// `pos` has already been checked against the sequence length.
    #[inline]
    pub(crate) fn new(seq: &'a mut BitSequence<W>, pos: usize) -> Self {
        Self { seq, pos }
    }

    /// Position of the referenced bit.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Current value of the bit.
    #[inline]
    pub fn get(&self) -> bool {
        self.seq.read_raw(self.pos)
    }

    /// Overwrite the bit and return the handle for chaining.
    #[inline]
    pub fn set(&mut self, val: bool) -> &mut Self {
        self.seq.write_raw(self.pos, val);
        self
    }

    /// Flip the bit.
    #[inline]
    pub fn toggle(&mut self) -> &mut Self {
        let val = !self.get();
        self.set(val)
    }

    /// Replace the bit, returning the previous value.
    #[inline]
    pub fn replace(&mut self, val: bool) -> bool {
        let prev = self.get();
        self.set(val);
        prev
    }
}

impl<W: BitWord> From<BitMut<'_, W>> for bool {
    #[inline]
    fn from(bit: BitMut<'_, W>) -> bool {
        bit.get()
    }
}

impl<W: BitWord> PartialEq<bool> for BitMut<'_, W> {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl<W: BitWord> fmt::Debug for BitMut<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitMut")
            .field("index", &self.pos)
            .field("value", &self.get())
            .finish()
    }
}
