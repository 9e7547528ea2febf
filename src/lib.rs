//! Bitseq - Resizable Word-Packed Bit Sequences
//!
//! Bitseq provides [`BitSequence`], a growable sequence of bits packed into
//! fixed-width words. Besides indexed access it supports inserting and
//! erasing bits at arbitrary positions, whole-sequence complement and shifts,
//! lexicographic ordering, and a plain `'0'`/`'1'` text form.
//!
//! # Key Characteristics
//!
//! - Word-packed storage with a logical length independent of capacity
//! - Positional insert/erase that move bits one at a time
//! - Storage only grows implicitly; [`BitSequence::shrink_to_fit`] reclaims it
//! - Fallible operations return [`Result`] instead of panicking
//!
//! # Architecture
//!
//! - **word**: the [`BitWord`] storage trait and bit addressing helpers
//! - **bit_sequence**: storage, single-bit access and structural mutation
//! - **bit_ref**: [`BitMut`], an exclusive handle to one bit
//! - **ops**: complement and shifts
//! - **cmp**: equality, hashing and lexicographic ordering
//! - **text**: `Display`/`FromStr`, stream reading/writing and serde
//!
//! # Examples
//!
//! ```
//! use bitseq::BitSequence;
//!
//! let mut seq = BitSequence::from_bit_str("1011").unwrap();
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.count_ones(), 3);
//! assert!(seq.get(0).unwrap());
//! assert!(!seq.get(1).unwrap());
//!
//! seq.push(true);
//! seq.insert(0, false).unwrap();
//! assert_eq!(seq.to_string(), "010111");
//!
//! let flipped = !&seq;
//! assert_eq!(flipped.to_string(), "101000");
//! assert!(seq.try_lt(&flipped).unwrap());
//! ```
//!
//! # Logging
//!
//! Storage reclamation and ownership transfer are reported through the `log`
//! facade at debug level. No logger is installed by this crate.

// Module declarations
pub mod bit_ref;
pub mod bit_sequence;
mod cmp;
pub mod error;
mod ops;
mod text;
pub mod word;

// Re-exports for convenient access
pub use bit_ref::BitMut;
pub use bit_sequence::{BitSequence, Iter};
pub use error::{BitSeqError, Result};
pub use word::{BitWord, Word, BITS_PER_WORD};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
