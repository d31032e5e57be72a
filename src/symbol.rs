use crate::error::{PackError, Result};
use ahash::AHashMap as HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Code reserved for "no symbol stored". Never assigned to a base pair.
pub const PADDING_CODE: u8 = 0;

/// A canonical, order-insensitive base pair.
///
/// Each variant carries its 4-bit code as the discriminant. A pair and its
/// character-swapped form (`AG` / `GA`) are the same symbol, so there are ten
/// of them rather than sixteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    AA = 1,
    AT = 2,
    AC = 3,
    AG = 4,
    TT = 5,
    CC = 6,
    GG = 7,
    TC = 8,
    TG = 9,
    CG = 10,
}

/// Token lookup, keyed by both orientations of every pair.
static TOKENS: OnceLock<HashMap<[u8; 2], Symbol>> = OnceLock::new();

fn tokens() -> &'static HashMap<[u8; 2], Symbol> {
    TOKENS.get_or_init(|| {
        let mut map = HashMap::with_capacity(2 * Symbol::ALL.len());
        for symbol in Symbol::ALL {
            let [a, b] = symbol.bytes();
            map.insert([a, b], symbol);
            map.insert([b, a], symbol);
        }
        map
    })
}

impl Symbol {
    /// Every base pair, in code order.
    pub const ALL: [Symbol; 10] = [
        Symbol::AA,
        Symbol::AT,
        Symbol::AC,
        Symbol::AG,
        Symbol::TT,
        Symbol::CC,
        Symbol::GG,
        Symbol::TC,
        Symbol::TG,
        Symbol::CG,
    ];

    /// Resolves a two-character token in either orientation.
    pub fn resolve(token: &str) -> Result<Self> {
        Self::resolve_bytes(token.as_bytes())
            .ok_or_else(|| PackError::InvalidSymbol(token.to_owned()))
    }

    /// Byte-level lookup used on the packing hot path.
    pub(crate) fn resolve_bytes(token: &[u8]) -> Option<Self> {
        let key: [u8; 2] = token.try_into().ok()?;
        tokens().get(&key).copied()
    }

    /// Looks up the symbol for a code in `1..=10`.
    ///
    /// [`PADDING_CODE`] is not a symbol; callers check for absence first.
    pub fn from_code(code: u8) -> Result<Self> {
        Self::decode(code).ok_or(PackError::InvalidCode(code))
    }

    #[inline]
    pub(crate) fn decode(code: u8) -> Option<Self> {
        match code {
            1..=10 => Some(Self::ALL[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// The 4-bit code stored in a packed field.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Canonical two-character form, e.g. `"AG"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::AA => "AA",
            Symbol::AT => "AT",
            Symbol::AC => "AC",
            Symbol::AG => "AG",
            Symbol::TT => "TT",
            Symbol::CC => "CC",
            Symbol::GG => "GG",
            Symbol::TC => "TC",
            Symbol::TG => "TG",
            Symbol::CG => "CG",
        }
    }

    /// Character-swapped form, e.g. `"GA"` for [`Symbol::AG`].
    pub fn reversed(self) -> String {
        let [a, b] = self.bytes();
        [b as char, a as char].iter().collect()
    }

    fn bytes(self) -> [u8; 2] {
        let s = self.as_str().as_bytes();
        [s[0], s[1]]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = PackError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<Symbol> for u8 {
    #[inline(always)]
    fn from(symbol: Symbol) -> u8 {
        symbol.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_nonzero() {
        let mut seen = [false; 16];
        for symbol in Symbol::ALL {
            let code = symbol.code();
            assert_ne!(code, PADDING_CODE);
            assert!(code <= 10);
            assert!(!seen[code as usize], "duplicate code {code}");
            seen[code as usize] = true;
        }
    }

    #[test]
    fn test_code_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_code(symbol.code()), Ok(symbol));
        }
    }

    #[test]
    fn test_from_code_rejects_padding_and_unmapped() {
        assert_eq!(Symbol::from_code(0), Err(PackError::InvalidCode(0)));
        assert_eq!(Symbol::from_code(11), Err(PackError::InvalidCode(11)));
        assert_eq!(Symbol::from_code(15), Err(PackError::InvalidCode(15)));
        assert!(Symbol::try_from(255u8).is_err());
    }

    #[test]
    fn test_resolve_both_orientations() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::resolve(symbol.as_str()), Ok(symbol));
            assert_eq!(Symbol::resolve(&symbol.reversed()), Ok(symbol));
        }
        assert_eq!(Symbol::resolve("GA"), Ok(Symbol::AG));
        assert_eq!(Symbol::resolve("CT"), Ok(Symbol::TC));
    }

    #[test]
    fn test_reversed_swaps_characters() {
        assert_eq!(Symbol::AG.reversed(), "GA");
        assert_eq!(Symbol::TG.reversed(), "GT");
        assert_eq!(Symbol::CC.reversed(), "CC");
    }

    #[test]
    fn test_resolve_rejects_bad_tokens() {
        for token in ["", "A", "AAA", "AX", "aa", "00", "ÄA"] {
            assert_eq!(
                Symbol::resolve(token),
                Err(PackError::InvalidSymbol(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Symbol::CG.to_string(), "CG");
        assert_eq!("GC".parse::<Symbol>(), Ok(Symbol::CG));
        assert_eq!(u8::from(Symbol::CG), 10);
    }
}
