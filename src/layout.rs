/// Width of one packed field in bits.
pub const FIELD_BITS: u32 = 4;

/// Mask covering exactly one field once it is shifted down to bit 0.
pub const FIELD_MASK: u32 = 0xF;

/// One of the eight 4-bit slots of a packed `u32`.
///
/// Positions are ordered, and `next` wraps from [`Field::Bp8`] back to
/// [`Field::Bp1`], which is how a packer steps across word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Field {
    Bp1 = 0,
    Bp2,
    Bp3,
    Bp4,
    Bp5,
    Bp6,
    Bp7,
    Bp8,
}

impl Field {
    /// Number of fields in one word.
    pub const COUNT: usize = 8;

    /// All positions in word order.
    pub const ALL: [Field; Self::COUNT] = [
        Field::Bp1,
        Field::Bp2,
        Field::Bp3,
        Field::Bp4,
        Field::Bp5,
        Field::Bp6,
        Field::Bp7,
        Field::Bp8,
    ];

    /// Looks up the position for an ordinal in `0..8`.
    #[inline]
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Ordinal of this position within the word.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit offset of the field's least significant bit.
    #[inline(always)]
    pub const fn offset(self) -> u32 {
        self as u32 * FIELD_BITS
    }

    /// The following position; wraps around after the last.
    #[inline]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// True only for the final field of a word.
    #[inline]
    pub const fn is_last(self) -> bool {
        matches!(self, Field::Bp8)
    }
}
