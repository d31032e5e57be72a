use crate::codec::{extract_at, pack, unpack_all};
use crate::error::{EncodingFault, PackError, Result};
use crate::fields::FieldSet;
use crate::layout::Field;
use crate::symbol::Symbol;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// A base-pair sequence packed eight symbols per `u32`.
///
/// Built once from text and never mutated afterwards. Any position can be
/// decoded in constant time without unpacking the rest of the array.
///
/// Invariant: `words.len() == length.div_ceil(8)`. Fields past `length` in
/// the final word are padding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedSequence {
    words: Vec<u32>,

    /// Number of base pairs stored
    length: usize,
}

impl PackedSequence {
    /// Packs `input`, a string over `A`, `T`, `C`, `G` of even length.
    ///
    /// An odd length fails with [`PackError::MalformedInput`]; any other
    /// character fails with [`PackError::UnknownEncoding`]. The empty string
    /// gives an empty sequence.
    pub fn new(input: &str) -> Result<Self> {
        if input.len() % 2 != 0 {
            return Err(PackError::MalformedInput { len: input.len() });
        }
        if let Some((offset, character)) = input
            .char_indices()
            .find(|&(_, c)| !matches!(c, 'A' | 'T' | 'C' | 'G'))
        {
            return Err(EncodingFault::IllegalCharacter { character, offset }.into());
        }

        let length = input.len() / 2;
        let words = Self::pack_words(input.as_bytes(), length)?;
        debug!(
            "Packed {} base pairs into {} words ({} bytes)",
            length,
            words.len(),
            words.len() * std::mem::size_of::<u32>()
        );

        Ok(Self { words, length })
    }

    /// Walks validated input two bytes at a time, flushing a word every
    /// eight symbols and once more for a partial tail.
    fn pack_words(input: &[u8], length: usize) -> Result<Vec<u32>> {
        let mut words = Vec::with_capacity(length.div_ceil(Field::COUNT));
        let mut staged = FieldSet::new();
        let mut field = Field::Bp1;

        for pair in input.chunks_exact(2) {
            let symbol = Symbol::resolve_bytes(pair).ok_or_else(|| {
                PackError::InvalidSymbol(String::from_utf8_lossy(pair).into_owned())
            })?;
            staged.put(field, symbol);

            if field.is_last() {
                let word = pack(&staged);
                trace!("word {}: {:#010x}", words.len(), word);
                words.push(word);
                staged.clear();
            }
            field = field.next();
        }

        if !staged.is_empty() {
            let word = pack(&staged);
            trace!("word {} (partial, {} fields): {:#010x}", words.len(), staged.len(), word);
            words.push(word);
        }

        Ok(words)
    }

    /// Decodes the base pair at `index`.
    pub fn get(&self, index: usize) -> Result<Symbol> {
        if index >= self.length {
            return Err(PackError::IndexOutOfRange {
                index,
                len: self.length,
            });
        }
        let word = self.words[index / Field::COUNT];
        let field = Field::ALL[index % Field::COUNT];

        extract_at(word, field)?.ok_or(EncodingFault::MissingSymbol { index }.into())
    }

    /// Decodes every base pair held by one packed word.
    ///
    /// Returns `None` if `word_index` is past the end of the word array.
    pub fn decode_word(&self, word_index: usize) -> Option<Result<Vec<Symbol>>> {
        self.words.get(word_index).map(|&word| unpack_all(word))
    }

    /// Number of base pairs in the sequence.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the sequence holds no base pairs.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of packed words backing the sequence.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Read-only view of the packed words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns packing statistics.
    pub fn stats(&self) -> PackingStats {
        PackingStats {
            symbols: self.length,
            words: self.words.len(),
        }
    }
}

/// Statistics about the packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingStats {
    /// Number of base pairs stored
    pub symbols: usize,
    /// Number of packed words
    pub words: usize,
}

impl PackingStats {
    /// Bytes used by the packed words.
    pub fn packed_bytes(&self) -> usize {
        self.words * std::mem::size_of::<u32>()
    }

    /// Bytes one `u32` per base pair would need.
    pub fn unpacked_bytes(&self) -> usize {
        self.symbols * std::mem::size_of::<u32>()
    }

    /// Packed size as a percentage of the unpacked size.
    pub fn compression_ratio(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            (self.packed_bytes() as f64 / self.unpacked_bytes() as f64) * 100.0
        }
    }
}

impl FromStr for PackedSequence {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PackedSequence {
    type Error = PackError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Writes the canonical form of every base pair, so `"GA"` prints as `"AG"`.
impl fmt::Display for PackedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self {
            f.write_str(symbol.as_str())?;
        }
        Ok(())
    }
}
