//! Repeated-accumulation conversion for radices that are not a power of two.
//!
//! The whole input is one big-endian number. Each incoming byte multiplies the
//! running value by 256 and adds itself, carried digit by digit through a
//! little-endian digit buffer, so the number is never materialized. Cost is
//! `O(input_len * output_len)`.
//!
//! Leading zero bytes carry no numeric weight, so each one is written as one
//! zero-digit symbol (the Bitcoin convention) and read back the same way.

use crate::core::alphabet::DigitAlphabet;

pub use super::errors::DecodeError;

/// Incremental encoder: bytes in, most-significant first.
#[derive(Debug)]
pub struct RadixEncoder<'a> {
    alphabet: &'a DigitAlphabet,
    // digits[0] is the least significant digit
    digits: Vec<u8>,
    leading_zeros: usize,
}

impl<'a> RadixEncoder<'a> {
    pub fn new(alphabet: &'a DigitAlphabet) -> Self {
        RadixEncoder {
            alphabet,
            digits: Vec::new(),
            leading_zeros: 0,
        }
    }

    /// Folds one byte into the running number: `n = n * 256 + byte`.
    pub fn push(&mut self, byte: u8) {
        if self.digits.is_empty() && byte == 0 {
            self.leading_zeros += 1;
            return;
        }

        let radix = self.alphabet.radix() as u32;
        let mut carry = u32::from(byte);
        for digit in self.digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % radix) as u8;
            carry /= radix;
        }
        while carry != 0 {
            self.digits.push((carry % radix) as u8);
            carry /= radix;
        }
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Number of symbols `finish` will emit.
    pub fn digit_count(&self) -> usize {
        self.leading_zeros + self.digits.len()
    }

    /// Emits the symbols, most-significant digit first.
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digit_count());
        out.resize(self.leading_zeros, self.alphabet.encode_digit(0));
        out.extend(
            self.digits
                .iter()
                .rev()
                .map(|&digit| self.alphabet.encode_digit(digit)),
        );
        out
    }
}

/// Incremental decoder: symbols in, most-significant first.
#[derive(Debug)]
pub struct RadixDecoder<'a> {
    alphabet: &'a DigitAlphabet,
    // bytes[0] is the least significant byte
    bytes: Vec<u8>,
    leading_zeros: usize,
    position: usize,
}

impl<'a> RadixDecoder<'a> {
    pub fn new(alphabet: &'a DigitAlphabet) -> Self {
        RadixDecoder {
            alphabet,
            bytes: Vec::new(),
            leading_zeros: 0,
            position: 0,
        }
    }

    /// Folds one symbol into the running number: `n = n * radix + digit`.
    ///
    /// # Errors
    ///
    /// Fails on a symbol outside the alphabet; the position counts every symbol
    /// pushed into this decoder.
    pub fn push(&mut self, symbol: u8) -> Result<(), DecodeError> {
        let digit = self
            .alphabet
            .decode_byte(symbol)
            .ok_or_else(|| DecodeError::invalid_character(symbol, self.position))?;
        self.position += 1;

        if self.bytes.is_empty() && digit == 0 {
            self.leading_zeros += 1;
            return Ok(());
        }

        let radix = self.alphabet.radix() as u32;
        let mut carry = u32::from(digit);
        for byte in self.bytes.iter_mut() {
            carry += u32::from(*byte) * radix;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry != 0 {
            self.bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
        Ok(())
    }

    pub fn extend(&mut self, symbols: &[u8]) -> Result<(), DecodeError> {
        symbols.iter().try_for_each(|&symbol| self.push(symbol))
    }

    /// Emits the bytes, most-significant first.
    pub fn finish(self) -> Vec<u8> {
        let mut out = vec![0u8; self.leading_zeros];
        out.extend(self.bytes.iter().rev());
        out
    }
}

pub fn encode(data: &[u8], alphabet: &DigitAlphabet) -> Vec<u8> {
    let mut encoder = RadixEncoder::new(alphabet);
    encoder.extend(data);
    encoder.finish()
}

pub fn decode(encoded: &[u8], alphabet: &DigitAlphabet) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = RadixDecoder::new(alphabet);
    decoder.extend(encoded)?;
    Ok(decoder.finish())
}
