//! # basepair-pack - Packed Base-Pair Sequences
//!
//! Encodes a string of base pairs (two-letter tokens over `A`, `T`, `C`, `G`)
//! into an array of `u32` words, eight 4-bit codes per word, and decodes any
//! single position back out without unpacking the rest.
//!
//! Pairs are order-insensitive: `"AG"` and `"GA"` are both [`Symbol::AG`], so
//! the alphabet has ten symbols with codes `1..=10`. Code `0` is padding and
//! fills the unused tail of the last word.
//!
//! ## Example
//!
//! ```
//! use basepair_pack::{PackedSequence, Symbol};
//!
//! let seq = PackedSequence::new("AAACAGGGAAACAGGGGA").unwrap();
//! assert_eq!(seq.len(), 9);
//! assert_eq!(seq.word_count(), 2);
//! assert_eq!(seq.get(7).unwrap(), Symbol::GG);
//! assert_eq!(seq.get(8).unwrap(), Symbol::AG);
//! assert!(seq.get(9).is_err());
//! ```
//!
//! ## Performance
//!
//! - O(n) construction, O(1) random access
//! - 4 bytes per 8 base pairs, an eighth of one `u32` slot per pair

mod codec;
mod error;
mod fields;
mod iter;
mod layout;
mod sequence;
mod symbol;


pub use codec::{extract_at, pack, unpack_all};
pub use error::{EncodingFault, PackError, Result};
pub use fields::FieldSet;
pub use iter::PackedIter;
pub use layout::{Field, FIELD_BITS, FIELD_MASK};
pub use sequence::{PackedSequence, PackingStats};
pub use symbol::{Symbol, PADDING_CODE};
