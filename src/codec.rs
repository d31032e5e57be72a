//! Single-word pack and unpack routines.
//!
//! A word holds up to eight 4-bit codes, one per [`Field`]. Code 0 is padding.

use crate::error::{EncodingFault, Result};
use crate::fields::FieldSet;
use crate::layout::{Field, FIELD_MASK};
use crate::symbol::{Symbol, PADDING_CODE};

/// Packs the staged symbols into one word. Empty slots stay zero.
pub fn pack(fields: &FieldSet) -> u32 {
    fields.iter().fold(0u32, |word, (field, symbol)| {
        word | (u32::from(symbol.code()) << field.offset())
    })
}

/// Decodes every non-padding field of `word`, in field order.
///
/// Zero fields are skipped wherever they appear; a non-zero field without a
/// base pair means the word is corrupt or came from a different layout.
pub fn unpack_all(word: u32) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::with_capacity(Field::COUNT);
    for field in Field::ALL {
        if let Some(symbol) = extract_at(word, field)? {
            symbols.push(symbol);
        }
    }
    Ok(symbols)
}

/// Decodes the single field at `field`; `None` if it holds padding.
#[inline]
pub fn extract_at(word: u32, field: Field) -> Result<Option<Symbol>> {
    let code = raw_code(word, field);
    if code == PADDING_CODE {
        return Ok(None);
    }
    Symbol::decode(code).map(Some).ok_or_else(|| {
        EncodingFault::IllegalCode {
            code,
            field: field.index(),
        }
        .into()
    })
}

#[inline(always)]
fn raw_code(word: u32, field: Field) -> u8 {
    ((word >> field.offset()) & FIELD_MASK) as u8
}
