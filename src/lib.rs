//! Base-x encoding over arbitrary digit alphabets.
//!
//! Alphabets whose size is a power of two are bit-packed in fixed groups;
//! every other size goes through repeated accumulation. Base64 (with `=`
//! padding) and base58 are built in, and both paths are available for
//! in-memory buffers and for read-once streams.
//!
//! ```
//! use basex::{Codec, decode, encode};
//!
//! assert_eq!(encode(b"Man", &Codec::Base64), b"TWFu");
//! assert_eq!(basex::base58::encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
//!
//! let hex = Codec::custom("0123456789abcdef").unwrap();
//! assert_eq!(decode(b"beef", &hex).unwrap(), [0xbe, 0xef]);
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabet::{DecodeTable, DigitAlphabet};
pub use crate::core::config::{AlgorithmConfig, AlgorithmRegistry};
pub use encoders::algorithms::chunked::Group;
pub use encoders::algorithms::errors::{AlgorithmError, AlphabetError, DecodeError, StreamError};
pub use encoders::algorithms::radix::{RadixDecoder, RadixEncoder};
pub use encoders::algorithms::{base58, base64, chunked, radix};
pub use encoders::codec::Codec;
pub use encoders::streaming::{DEFAULT_WINDOW, StreamStats, StreamingDecoder, StreamingEncoder};

/// Encodes binary data with the given codec.
///
/// # Arguments
///
/// * `data` - The binary data to encode
/// * `codec` - The codec to use
///
/// # Returns
///
/// The encoded symbols, one byte per digit
pub fn encode(data: &[u8], codec: &Codec) -> Vec<u8> {
    codec.encode(data)
}

/// Decodes symbols back to binary data.
///
/// # Errors
///
/// Returns `DecodeError::InvalidCharacter` for the first byte that is not a
/// symbol of the codec's alphabet.
pub fn decode(encoded: &[u8], codec: &Codec) -> Result<Vec<u8>, DecodeError> {
    codec.decode(encoded)
}
