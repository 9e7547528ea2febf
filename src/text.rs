//! Textual form of a bit sequence.
//!
//! The text form is one `'0'` or `'1'` character per bit, index 0 first, with
//! no separators, length prefix or terminator. It is used by `Display`,
//! `FromStr`, the stream helpers and the serde implementations alike, so
//! `parse(to_string(x)) == x` for every sequence.

use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bit_sequence::BitSequence;
use crate::error::{BitSeqError, Result};
use crate::word::{words_for_bits, BitWord, Word};

#[inline]
fn is_bit_byte(b: u8) -> bool {
    b == b'0' || b == b'1'
}

impl BitSequence<Word> {
    /// Parse a string of `'0'` and `'1'` characters.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::InvalidFormat`] for the first character that is
    /// not a bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let seq = BitSequence::from_bit_str("1011").unwrap();
    /// assert_eq!(seq.len(), 4);
    /// assert_eq!(seq.count_ones(), 3);
    /// assert!(BitSequence::from_bit_str("abc").is_err());
    /// ```
    pub fn from_bit_str(s: &str) -> Result<Self> {
        Self::from_bit_str_with_word_type(s)
    }
}

impl<W: BitWord> BitSequence<W> {
    /// Parse a string of `'0'` and `'1'` characters into words of type `W`.
    pub fn from_bit_str_with_word_type(s: &str) -> Result<Self> {
        let mut seq = Self {
            words: Vec::with_capacity(words_for_bits::<W>(s.len())),
            num_bits: 0,
        };
        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => seq.push(false),
                '1' => seq.push(true),
                _ => {
                    return Err(BitSeqError::InvalidFormat {
                        character,
                        position,
                    })
                }
            }
        }
        Ok(seq)
    }

    /// Render the sequence as `'0'`/`'1'` characters.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|b| if b { '1' } else { '0' }).collect()
    }

    /// Replace the contents with the next run of bit characters from `reader`.
    ///
    /// Leading bytes other than `'0'` and `'1'` are skipped. Reading stops at
    /// the first byte after the run, which is left in the reader.
    ///
    /// # Errors
    ///
    /// Returns [`BitSeqError::EndOfData`] if the reader is exhausted before a
    /// bit character is found (the sequence is left untouched), or
    /// [`BitSeqError::Io`] if the reader fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let mut input = "  101 0011".as_bytes();
    /// let mut seq = BitSequence::new();
    ///
    /// seq.read_from(&mut input).unwrap();
    /// assert_eq!(seq.to_string(), "101");
    /// seq.read_from(&mut input).unwrap();
    /// assert_eq!(seq.to_string(), "0011");
    /// assert!(seq.read_from(&mut input).is_err());
    /// ```
    pub fn read_from<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<()> {
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                return Err(BitSeqError::EndOfData);
            }
            let len = buf.len();
            match buf.iter().position(|&b| is_bit_byte(b)) {
                Some(skip) => {
                    reader.consume(skip);
                    break;
                }
                None => reader.consume(len),
            }
        }

        self.clear();
        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let len = buf.len();
            let run = buf.iter().take_while(|&&b| is_bit_byte(b)).count();
            for &b in &buf[..run] {
                self.push(b == b'1');
            }
            reader.consume(run);
            if run < len || len == 0 {
                return Ok(());
            }
        }
    }

    /// Write the text form to `writer`.
    pub fn write_to<Wr: Write + ?Sized>(&self, writer: &mut Wr) -> Result<()> {
        let bytes: Vec<u8> = self.iter().map(|b| if b { b'1' } else { b'0' }).collect();
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl<W: BitWord> fmt::Display for BitSequence<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<W: BitWord> FromStr for BitSequence<W> {
    type Err = BitSeqError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bit_str_with_word_type(s)
    }
}

// =============================================================================
// Serde
// =============================================================================

impl<W: BitWord> Serialize for BitSequence<W> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, W: BitWord> Deserialize<'de> for BitSequence<W> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitStrVisitor<W>(PhantomData<W>);

        impl<W: BitWord> Visitor<'_> for BitStrVisitor<W> {
            type Value = BitSequence<W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string of '0' and '1' characters")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                BitSequence::from_bit_str_with_word_type(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BitStrVisitor(PhantomData))
    }
}
