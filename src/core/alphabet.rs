use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::AlphabetError;

/// Byte-to-digit lookup for one alphabet.
///
/// Entries for bytes outside the alphabet are `None`, so an invalid symbol
/// can never leak into the conversion arithmetic.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodeTable {
    entries: [Option<u8>; 256],
}

impl DecodeTable {
    /// Builds the table for `symbols`.
    ///
    /// Panics on duplicate symbols or more than 256 of them; usable in `static`
    /// initializers, where the panic becomes a compile error.
    pub const fn new(symbols: &[u8]) -> Self {
        assert!(symbols.len() <= 256, "alphabet holds at most 256 symbols");

        let mut entries = [None; 256];
        let mut i = 0;
        while i < symbols.len() {
            let slot = symbols[i] as usize;
            assert!(entries[slot].is_none(), "duplicate symbol in alphabet");
            entries[slot] = Some(i as u8);
            i += 1;
        }
        DecodeTable { entries }
    }

    /// Digit value of `byte`, or `None` when it is not a symbol.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<u8> {
        self.entries[byte as usize]
    }
}

impl fmt::Debug for DecodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("DecodeTable").field("valid", &valid).finish()
    }
}

/// An ordered set of distinct symbols; the position of a symbol is its digit value.
///
/// Symbols are single bytes, so any radix from 2 to 256 can be expressed. The
/// built-in alphabets are plain ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitAlphabet {
    symbols: Cow<'static, [u8]>,
    table: DecodeTable,
}

impl DigitAlphabet {
    /// Creates an alphabet from a static symbol list at compile time.
    ///
    /// Panics when the list is shorter than 2 symbols or has duplicates.
    pub const fn from_static(symbols: &'static [u8]) -> Self {
        assert!(symbols.len() >= 2, "alphabet needs at least 2 symbols");
        DigitAlphabet {
            symbols: Cow::Borrowed(symbols),
            table: DecodeTable::new(symbols),
        }
    }

    /// Creates an alphabet from an owned symbol list.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 or more than 256 symbols, or
    /// if a symbol repeats.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self, AlphabetError> {
        let symbols = symbols.into();

        if symbols.len() < 2 {
            return Err(AlphabetError::TooShort { len: symbols.len() });
        }
        if symbols.len() > 256 {
            return Err(AlphabetError::TooLong { len: symbols.len() });
        }

        let mut seen = [false; 256];
        for (position, &byte) in symbols.iter().enumerate() {
            if std::mem::replace(&mut seen[byte as usize], true) {
                return Err(AlphabetError::Duplicate { byte, position });
            }
        }

        let table = DecodeTable::new(&symbols);
        Ok(DigitAlphabet {
            symbols: Cow::Owned(symbols),
            table,
        })
    }

    /// Returns the radix, which is the number of symbols.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbol for `digit`. The digit must be below the radix.
    #[inline]
    pub fn encode_digit(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Digit value for `byte`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn decode_byte(&self, byte: u8) -> Option<u8> {
        self.table.get(byte)
    }
}

impl FromStr for DigitAlphabet {
    type Err = AlphabetError;

    /// Uses the UTF-8 bytes of `s` as the symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}
