use crate::core::alphabet::DigitAlphabet;
use crate::core::config::AlgorithmRegistry;
use crate::encoders::algorithms::errors::{AlgorithmError, AlphabetError, DecodeError};
use crate::encoders::algorithms::{base58, base64, chunked, radix};

use chunked::Group;

/// A ready-to-use encoder/decoder: one of the built-in schemes or a custom alphabet.
///
/// Custom alphabets take the bit-packing path when their radix is a power of
/// two and the repeated-accumulation path otherwise. Neither pads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codec {
    /// RFC 4648 base64 with `=` padding
    Base64,
    /// Bitcoin base58
    Base58,
    /// Positional digit mapping over any alphabet of 2 to 256 symbols
    Custom(DigitAlphabet),
}

impl Codec {
    /// Resolves an algorithm name.
    ///
    /// Names found in `registry` select that entry; any other string of at least
    /// two bytes is taken literally as the digit alphabet.
    ///
    /// # Errors
    ///
    /// Fails when the name is shorter than two bytes or the literal alphabet
    /// repeats a symbol.
    pub fn from_algorithm(name: &str, registry: &AlgorithmRegistry) -> Result<Self, AlgorithmError> {
        if let Some(config) = registry.get_algorithm(name) {
            return config.build(name);
        }

        if name.len() < 2 {
            return Err(AlgorithmError::InvalidName {
                name: name.to_string(),
            });
        }

        Codec::custom(name.as_bytes()).map_err(|source| AlgorithmError::Alphabet {
            name: name.to_string(),
            source,
        })
    }

    /// Codec over a custom symbol list.
    ///
    /// Symbol lists equal to a built-in alphabet still produce a `Custom` codec,
    /// which does not pad.
    pub fn custom(symbols: impl Into<Vec<u8>>) -> Result<Self, AlphabetError> {
        DigitAlphabet::new(symbols).map(Codec::Custom)
    }

    pub fn alphabet(&self) -> &DigitAlphabet {
        match self {
            Codec::Base64 => &base64::ALPHABET,
            Codec::Base58 => &base58::ALPHABET,
            Codec::Custom(alphabet) => alphabet,
        }
    }

    pub fn radix(&self) -> usize {
        self.alphabet().radix()
    }

    pub fn padding(&self) -> Option<u8> {
        match self {
            Codec::Base64 => Some(base64::PADDING),
            _ => None,
        }
    }

    /// Bit-packing group, or `None` for the repeated-accumulation path.
    pub fn group(&self) -> Option<Group> {
        match self {
            Codec::Base64 => Some(base64::GROUP),
            Codec::Base58 => None,
            Codec::Custom(alphabet) => Group::for_radix(alphabet.radix()),
        }
    }

    /// Encodes a whole in-memory buffer.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(data, &mut out);
        out
    }

    /// Encodes into a `String`.
    ///
    /// Exact for ASCII alphabets; symbol bytes that do not form UTF-8 are
    /// mapped one-to-one onto `U+0000..=U+00FF`.
    pub fn encode_to_string(&self, data: &[u8]) -> String {
        match String::from_utf8(self.encode(data)) {
            Ok(text) => text,
            Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
        }
    }

    /// Decodes a whole in-memory buffer.
    pub fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::new();
        self.decode_into(encoded, &mut out)?;
        Ok(out)
    }

    /// Random-access encode of one window, appended to `out`.
    pub(crate) fn encode_into(&self, data: &[u8], out: &mut Vec<u8>) {
        match (self, self.group()) {
            (Codec::Base64, _) => base64::encode_into(data, out),
            (_, Some(group)) => chunked::encode_chunked_into(data, self.alphabet(), group, out),
            (_, None) => out.extend(radix::encode(data, self.alphabet())),
        }
    }

    /// Random-access decode of one window, appended to `out`.
    pub(crate) fn decode_into(&self, encoded: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeError> {
        match (self, self.group()) {
            (Codec::Base64, _) => base64::decode_into(encoded, out),
            (_, Some(group)) => chunked::decode_chunked_into(encoded, self.alphabet(), group, out),
            (_, None) => {
                out.extend(radix::decode(encoded, self.alphabet())?);
                Ok(())
            }
        }
    }

    /// Short name used in logs.
    pub fn describe(&self) -> String {
        match self {
            Codec::Base64 => "base64".to_string(),
            Codec::Base58 => "base58".to_string(),
            Codec::Custom(alphabet) => format!("custom radix-{}", alphabet.radix()),
        }
    }
}
