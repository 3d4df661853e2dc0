//! RFC 4648 base64: bit-packing in 3-byte / 4-symbol groups plus `=` padding.

use crate::core::alphabet::DigitAlphabet;

use super::chunked::{self, Group};
pub use super::errors::DecodeError;

pub static ALPHABET: DigitAlphabet =
    DigitAlphabet::from_static(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

pub const PADDING: u8 = b'=';

pub const GROUP: Group = Group {
    bits: 6,
    bytes: 3,
    digits: 4,
};

/// Encodes `data` as padded base64 text.
///
/// # Example
///
/// ```
/// assert_eq!(basex::base64::encode(b"fo"), "Zm8=");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut out = Vec::with_capacity(data.len().div_ceil(GROUP.bytes) * GROUP.digits);
    encode_into(data, &mut out);
    out.into_iter().map(char::from).collect()
}

/// Decodes padded base64 text.
///
/// A remainder that does not fill a 4-symbol group is ignored as trailing garbage.
pub fn decode(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let encoded = encoded.as_ref();
    let mut out = Vec::with_capacity(encoded.len() / GROUP.digits * GROUP.bytes);
    decode_into(encoded, &mut out)?;
    Ok(out)
}

/// Encodes one window. Whole groups go through the bit-packing path; a short
/// final group is left-aligned and padded with `=` to 4 symbols.
pub(crate) fn encode_into(data: &[u8], out: &mut Vec<u8>) {
    let tail = chunked::encode_groups(data, &ALPHABET, GROUP, out);
    if !tail.is_empty() {
        // 1 byte -> 2 symbols + "==", 2 bytes -> 3 symbols + "="
        chunked::encode_tail(tail, &ALPHABET, GROUP, out);
        out.resize(out.len() + GROUP.bytes - tail.len(), PADDING);
    }
}

/// Decodes one window.
///
/// The window is first cut down to a multiple of 4 symbols. When the last
/// group carries `=`, only the symbols before the first `=` are data.
pub(crate) fn decode_into(encoded: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let aligned = encoded.len() - encoded.len() % GROUP.digits;
    if aligned < encoded.len() {
        log::debug!(
            "ignoring {} trailing byte(s) after {} aligned symbols",
            encoded.len() - aligned,
            aligned
        );
    }
    if aligned == 0 {
        return Ok(());
    }

    let (body, last) = encoded[..aligned].split_at(aligned - GROUP.digits);
    match last.iter().position(|&b| b == PADDING) {
        Some(pad) => {
            chunked::decode_groups(body, &ALPHABET, GROUP, out)?;
            decode_padded(&last[..pad], body.len(), out)
        }
        None => chunked::decode_groups(&encoded[..aligned], &ALPHABET, GROUP, out).map(|_| ()),
    }
}

fn decode_padded(data: &[u8], offset: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    if data.len() < 2 {
        log::debug!("padded group with {} data symbol(s) holds no byte", data.len());
        return Ok(());
    }
    // 2 symbols -> 12 bits, drop 4; 3 symbols -> 18 bits, drop 2
    chunked::decode_tail(data, &ALPHABET, GROUP, offset, out)
}
