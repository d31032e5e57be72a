use thiserror::Error;

/// Errors produced while packing or decoding a base-pair sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// The input cannot be split into whole two-character symbols.
    #[error("Unexpected length {len}: sequence should be composed of pairs")]
    MalformedInput { len: usize },

    /// Input text or packed data holds a value outside the known encoding.
    #[error("Unexpected encoding: {0}")]
    UnknownEncoding(EncodingFault),

    /// A decode was requested past the end of the sequence.
    #[error("Position {index} does not fall within the sequence (len = {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A token is not a base pair in either orientation.
    #[error("Invalid base pair token: {0:?}")]
    InvalidSymbol(String),

    /// A code does not belong to any base pair.
    #[error("Invalid base pair code: {0}")]
    InvalidCode(u8),
}

/// Where an [`PackError::UnknownEncoding`] was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingFault {
    /// Construction path: the input holds a character other than A, T, C or G.
    #[error("character {character:?} at offset {offset}, sequence may only contain A, T, C or G")]
    IllegalCharacter { character: char, offset: usize },

    /// Decode path: a packed field holds a non-zero code with no base pair.
    #[error("field {field} holds illegal code {code:#x}")]
    IllegalCode { code: u8, field: usize },

    /// Decode path: an in-range position reads back as padding.
    #[error("position {index} holds padding")]
    MissingSymbol { index: usize },
}

impl From<EncodingFault> for PackError {
    fn from(fault: EncodingFault) -> Self {
        PackError::UnknownEncoding(fault)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PackError>;
