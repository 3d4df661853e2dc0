//! Bitcoin base58: repeated accumulation over a 58-symbol alphabet, no padding.

use crate::core::alphabet::DigitAlphabet;

use super::radix;
pub use super::errors::DecodeError;

/// Alphanumerics without `0`, `O`, `I` and `l`.
pub static ALPHABET: DigitAlphabet =
    DigitAlphabet::from_static(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// Encodes `data` as base58 text. Each leading zero byte becomes a `1`.
///
/// # Example
///
/// ```
/// assert_eq!(basex::base58::encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
/// ```
pub fn encode(data: &[u8]) -> String {
    radix::encode(data, &ALPHABET)
        .into_iter()
        .map(char::from)
        .collect()
}

pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    radix::decode(encoded.as_ref(), &ALPHABET)
}
