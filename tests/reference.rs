//! Agreement with an arbitrary-precision reference.
//!
//! Alphabets here map digit `d` to the byte `d`, so encoded output can be
//! compared directly with `BigUint::to_radix_be`.

use basex::{Codec, decode, encode};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POWER_OF_TWO: [u32; 7] = [2, 4, 8, 16, 32, 64, 128];
const ACCUMULATED: [u32; 5] = [3, 5, 7, 58, 100];

fn identity_codec(radix: u32) -> Codec {
    let symbols: Vec<u8> = (0..radix).map(|d| d as u8).collect();
    Codec::custom(symbols).unwrap()
}

fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}

/// Lengths 0 and 1000 always, plus a spread in between.
fn lengths(rng: &mut StdRng) -> Vec<usize> {
    let mut lengths = vec![0, 1, 1000];
    lengths.extend((0..12).map(|_| rng.random_range(2..1000)));
    lengths
}

fn reference_digits(data: &[u8], radix: u32) -> Vec<u8> {
    let value = BigUint::from_bytes_be(data);
    if value.is_zero() {
        return Vec::new();
    }
    value.to_radix_be(radix)
}

#[test]
fn test_bit_packing_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);

    for radix in POWER_OF_TWO {
        let codec = identity_codec(radix);
        let group = codec.group().unwrap();

        for len in lengths(&mut rng) {
            // Whole groups only: the number's digits, zero-extended to the group width
            let len = len / group.bytes * group.bytes;
            let data = random_bytes(&mut rng, len);

            let width = len / group.bytes * group.digits;
            let digits = reference_digits(&data, radix);
            let mut expected = vec![0u8; width - digits.len()];
            expected.extend(digits);

            let encoded = encode(&data, &codec);
            assert_eq!(encoded, expected, "radix {} len {}", radix, len);
            assert_eq!(decode(&encoded, &codec).unwrap(), data, "radix {} len {}", radix, len);
        }
    }
}

#[test]
fn test_accumulation_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);

    for radix in ACCUMULATED {
        let codec = identity_codec(radix);
        assert!(codec.group().is_none());

        for len in lengths(&mut rng) {
            let mut data = random_bytes(&mut rng, len);
            // Exercise the leading-zero prefix on some inputs
            let zeros = rng.random_range(0..4).min(data.len());
            data[..zeros].fill(0);

            let prefix = data.iter().take_while(|&&b| b == 0).count();
            let mut expected = vec![0u8; prefix];
            expected.extend(reference_digits(&data[prefix..], radix));

            let encoded = encode(&data, &codec);
            assert_eq!(encoded, expected, "radix {} len {}", radix, len);
            assert_eq!(decode(&encoded, &codec).unwrap(), data, "radix {} len {}", radix, len);
        }
    }
}

#[test]
fn test_round_trip_any_length() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);

    for radix in POWER_OF_TWO.into_iter().chain(ACCUMULATED).chain([256]) {
        let codec = identity_codec(radix);
        for len in 0..40 {
            let data = random_bytes(&mut rng, len);
            let encoded = encode(&data, &codec);
            assert_eq!(decode(&encoded, &codec).unwrap(), data, "radix {} len {}", radix, len);
        }
    }

    for codec in [Codec::Base64, Codec::Base58] {
        for len in 0..100 {
            let data = random_bytes(&mut rng, len);
            let encoded = encode(&data, &codec);
            assert_eq!(decode(&encoded, &codec).unwrap(), data, "{:?} len {}", codec, len);
        }
    }
}

#[test]
fn test_base58_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    let symbols = basex::base58::ALPHABET.symbols();

    for len in lengths(&mut rng) {
        let data = random_bytes(&mut rng, len);
        let prefix = data.iter().take_while(|&&b| b == 0).count();

        let mut expected: Vec<u8> = vec![b'1'; prefix];
        expected.extend(
            reference_digits(&data[prefix..], 58)
                .into_iter()
                .map(|d| symbols[d as usize]),
        );

        assert_eq!(basex::base58::encode(&data).into_bytes(), expected, "len {}", len);
    }
}
