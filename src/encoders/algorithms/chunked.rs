use crate::core::alphabet::DigitAlphabet;
use num_integer::lcm;

pub use super::errors::DecodeError;

// lcm(k, 8) / k never exceeds 8 for 1 <= k <= 8
const MAX_GROUP_DIGITS: usize = 8;

/// Geometry of a bit-packing group for a power-of-two radix `2^bits`.
///
/// A group is `lcm(bits, 8)` bits wide: `bytes` input bytes map onto exactly
/// `digits` symbols with no bits left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub bits: u32,
    pub bytes: usize,
    pub digits: usize,
}

impl Group {
    /// Returns the group for `radix`, or `None` when the radix is not a power
    /// of two between 2 and 256.
    pub fn for_radix(radix: usize) -> Option<Self> {
        if !(2..=256).contains(&radix) || !radix.is_power_of_two() {
            return None;
        }
        let bits = radix.trailing_zeros();
        let width = lcm(bits as usize, 8);
        Some(Group {
            bits,
            bytes: width / 8,
            digits: width / bits as usize,
        })
    }

    fn mask(&self) -> u64 {
        (1u64 << self.bits) - 1
    }
}

/// Encodes every whole group of `data` and returns the unconsumed tail
/// (shorter than one group).
pub fn encode_groups<'d>(
    data: &'d [u8],
    alphabet: &DigitAlphabet,
    group: Group,
    out: &mut Vec<u8>,
) -> &'d [u8] {
    let mask = group.mask();
    let mut buffer = [0u8; MAX_GROUP_DIGITS];

    let mut chunks = data.chunks_exact(group.bytes);
    for chunk in chunks.by_ref() {
        let mut bits = chunk.iter().fold(0u64, |acc, &b| acc << 8 | u64::from(b));
        // Extraction yields the least significant digit first; fill from the back.
        for slot in buffer[..group.digits].iter_mut().rev() {
            *slot = alphabet.encode_digit((bits & mask) as u8);
            bits >>= group.bits;
        }
        out.extend_from_slice(&buffer[..group.digits]);
    }
    chunks.remainder()
}

/// Encodes a short final group of `tail.len()` bytes.
///
/// The bytes are left-aligned into `ceil(8 * len / bits)` digits; the unused
/// low bits are zero. Padding, if any, is the caller's business.
pub fn encode_tail(tail: &[u8], alphabet: &DigitAlphabet, group: Group, out: &mut Vec<u8>) {
    debug_assert!(tail.len() < group.bytes);
    if tail.is_empty() {
        return;
    }

    let width = tail.len() * 8;
    let digits = width.div_ceil(group.bits as usize);
    let shift = digits * group.bits as usize - width;

    let mask = group.mask();
    let mut bits = tail.iter().fold(0u64, |acc, &b| acc << 8 | u64::from(b)) << shift;
    let mut buffer = [0u8; MAX_GROUP_DIGITS];
    for slot in buffer[..digits].iter_mut().rev() {
        *slot = alphabet.encode_digit((bits & mask) as u8);
        bits >>= group.bits;
    }
    out.extend_from_slice(&buffer[..digits]);
}

/// Decodes every whole group of `encoded` and returns the unconsumed tail.
///
/// Error positions are relative to the start of `encoded`.
pub fn decode_groups<'e>(
    encoded: &'e [u8],
    alphabet: &DigitAlphabet,
    group: Group,
    out: &mut Vec<u8>,
) -> Result<&'e [u8], DecodeError> {
    let mut chunks = encoded.chunks_exact(group.digits);
    for (index, chunk) in chunks.by_ref().enumerate() {
        let bits = accumulate(chunk, alphabet, group.bits, index * group.digits)?;
        for shift in (0..group.bytes).rev() {
            out.push((bits >> (shift * 8)) as u8);
        }
    }
    Ok(chunks.remainder())
}

/// Decodes a short final group of symbols, positioned at `offset` in the input.
///
/// `len` symbols hold `floor(len * bits / 8)` bytes; the low leftover bits are
/// discarded. A tail too short to hold a single byte is dropped as trailing garbage.
pub fn decode_tail(
    tail: &[u8],
    alphabet: &DigitAlphabet,
    group: Group,
    offset: usize,
    out: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    if tail.is_empty() {
        return Ok(());
    }

    let bits = accumulate(tail, alphabet, group.bits, offset)?;
    let width = tail.len() * group.bits as usize;
    let bytes = width / 8;
    if bytes == 0 {
        log::debug!("dropping {} trailing symbol(s) that hold no whole byte", tail.len());
        return Ok(());
    }

    let bits = bits >> (width % 8);
    for shift in (0..bytes).rev() {
        out.push((bits >> (shift * 8)) as u8);
    }
    Ok(())
}

fn accumulate(
    symbols: &[u8],
    alphabet: &DigitAlphabet,
    bits_per_digit: u32,
    offset: usize,
) -> Result<u64, DecodeError> {
    symbols
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (i, &symbol)| {
            let digit = alphabet
                .decode_byte(symbol)
                .ok_or_else(|| DecodeError::invalid_character(symbol, offset + i))?;
            Ok(acc << bits_per_digit | u64::from(digit))
        })
}

/// Unpadded bit-packing encode of a power-of-two alphabet.
///
/// The caller guarantees the radix is a power of two.
pub fn encode_chunked(data: &[u8], alphabet: &DigitAlphabet, group: Group) -> Vec<u8> {
    let mut out = Vec::with_capacity((data.len() * 8).div_ceil(group.bits as usize));
    encode_chunked_into(data, alphabet, group, &mut out);
    out
}

pub(crate) fn encode_chunked_into(
    data: &[u8],
    alphabet: &DigitAlphabet,
    group: Group,
    out: &mut Vec<u8>,
) {
    let tail = encode_groups(data, alphabet, group, out);
    encode_tail(tail, alphabet, group, out);
}

pub fn decode_chunked(
    encoded: &[u8],
    alphabet: &DigitAlphabet,
    group: Group,
) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(encoded.len() * group.bits as usize / 8);
    decode_chunked_into(encoded, alphabet, group, &mut out)?;
    Ok(out)
}

pub(crate) fn decode_chunked_into(
    encoded: &[u8],
    alphabet: &DigitAlphabet,
    group: Group,
    out: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    let tail = decode_groups(encoded, alphabet, group, out)?;
    decode_tail(tail, alphabet, group, encoded.len() - tail.len(), out)
}
