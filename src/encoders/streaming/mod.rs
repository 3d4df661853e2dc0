mod decoder;
mod encoder;

pub use decoder::StreamingDecoder;
pub use encoder::StreamingEncoder;

use std::io::{self, Read};

use crate::encoders::codec::Codec;

/// Default window size in input bytes (or symbols when decoding).
pub const DEFAULT_WINDOW: usize = 3 << 8;

/// Counters reported by a finished streaming call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Bytes read from the source
    pub bytes_in: usize,
    /// Bytes written to the sink
    pub bytes_out: usize,
    /// Windows filled from the source
    pub windows: usize,
}

/// Largest multiple of `unit` that fits in `DEFAULT_WINDOW`.
fn default_window(unit: usize) -> usize {
    (DEFAULT_WINDOW / unit).max(1) * unit
}

fn check_window(window: usize, unit: usize) -> Result<usize, crate::StreamError> {
    if window == 0 || window % unit != 0 {
        return Err(crate::StreamError::Window {
            window,
            group: unit,
        });
    }
    Ok(window)
}

/// Encode windows must hold whole input groups; repeated accumulation has none.
fn encode_unit(codec: &Codec) -> usize {
    codec.group().map_or(1, |group| group.bytes)
}

fn decode_unit(codec: &Codec) -> usize {
    codec.group().map_or(1, |group| group.digits)
}

/// Reads until `buffer` is full or the source is exhausted.
///
/// Returns the number of bytes filled; anything short of `buffer.len()` means
/// end of input.
fn fill_window<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out at most `step` bytes per call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn stream_encode(codec: &Codec, data: &[u8], window: usize) -> Vec<u8> {
        let mut output = Vec::new();
        let mut encoder = StreamingEncoder::new(codec, &mut output)
            .with_window(window)
            .unwrap();
        encoder.encode(&mut Cursor::new(data)).unwrap();
        output
    }

    fn stream_decode(codec: &Codec, encoded: &[u8], window: usize) -> Vec<u8> {
        let mut output = Vec::new();
        let mut decoder = StreamingDecoder::new(codec, &mut output)
            .with_window(window)
            .unwrap();
        decoder.decode(&mut Cursor::new(encoded)).unwrap();
        output
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 131 + 7) as u8).collect()
    }

    #[test]
    fn test_streaming_encode_decode_base64() {
        let data = b"Hello, World! This is a streaming test with multiple chunks of data.";

        let encoded = stream_encode(&Codec::Base64, data, DEFAULT_WINDOW);
        assert_eq!(encoded, Codec::Base64.encode(data));

        let decoded = stream_decode(&Codec::Base64, &encoded, DEFAULT_WINDOW);
        assert_eq!(&decoded[..], &data[..]);
    }

    #[test]
    fn test_streaming_large_data() {
        // 100KB, many windows
        let data: Vec<u8> = (0..100000).map(|i| (i % 256) as u8).collect();

        let mut encoded = Vec::new();
        let stats = StreamingEncoder::new(&Codec::Base64, &mut encoded)
            .encode(&mut Cursor::new(&data))
            .unwrap();
        assert_eq!(stats.bytes_in, data.len());
        assert_eq!(stats.bytes_out, encoded.len());
        assert_eq!(stats.windows, data.len().div_ceil(DEFAULT_WINDOW));

        let mut decoded = Vec::new();
        StreamingDecoder::new(&Codec::Base64, &mut decoded)
            .decode(&mut Cursor::new(&encoded))
            .unwrap();
        assert_eq!(data, decoded);
    }

    #[test]
    fn test_base64_window_sizes_match_one_shot() {
        for len in [0, 1, 2, 3, 4, 5, 47, 48, 49, 767, 768, 769, 2000] {
            let data = sample(len);
            let expected = Codec::Base64.encode(&data);
            for window in [3, 6, 12, 96, 768, 3072] {
                assert_eq!(
                    stream_encode(&Codec::Base64, &data, window),
                    expected,
                    "len {} window {}",
                    len,
                    window
                );
            }
            for window in [4, 8, 16, 128, 1024] {
                assert_eq!(
                    stream_decode(&Codec::Base64, &expected, window),
                    data,
                    "len {} window {}",
                    len,
                    window
                );
            }
        }
    }

    #[test]
    fn test_base64_trailing_newline_on_window_boundary() {
        let data = sample(96);
        let mut encoded = Codec::Base64.encode(&data);
        assert_eq!(encoded.len(), 128);
        encoded.push(b'\n');
        assert_eq!(stream_decode(&Codec::Base64, &encoded, 128), data);
        assert_eq!(stream_decode(&Codec::Base64, &encoded, 64), data);
        assert_eq!(stream_decode(&Codec::Base64, &encoded, 4), data);
    }

    #[test]
    fn test_base64_padded_final_window() {
        // Final window is exactly full and carries padding
        let data = sample(764);
        let encoded = Codec::Base64.encode(&data);
        assert_eq!(encoded.len(), 1020);
        assert_eq!(stream_decode(&Codec::Base64, &encoded, 1020), data);
        assert_eq!(stream_decode(&Codec::Base64, &encoded, 340), data);
    }

    #[test]
    fn test_base58_streaming_matches_one_shot() {
        let mut data = vec![0, 0];
        data.extend(sample(300));
        let expected = Codec::Base58.encode(&data);
        for window in [1, 7, 64, 768] {
            assert_eq!(stream_encode(&Codec::Base58, &data, window), expected);
            assert_eq!(stream_decode(&Codec::Base58, &expected, window), data);
        }
    }

    #[test]
    fn test_custom_pow2_streaming_matches_one_shot() {
        // radix 32: 5-byte / 8-symbol groups, so tails show up at most lengths
        let codec = Codec::custom(*b"abcdefghijklmnopqrstuvwxyz234567").unwrap();
        for len in [0, 1, 4, 5, 6, 99, 1000] {
            let data = sample(len);
            let expected = codec.encode(&data);
            for window in [5, 40, 765] {
                assert_eq!(stream_encode(&codec, &data, window), expected);
            }
            for window in [8, 64, 768] {
                assert_eq!(stream_decode(&codec, &expected, window), data);
            }
        }
    }

    #[test]
    fn test_short_reads() {
        let data = sample(1000);
        let expected = Codec::Base64.encode(&data);

        let mut output = Vec::new();
        StreamingEncoder::new(&Codec::Base64, &mut output)
            .encode(&mut Trickle {
                data: &data,
                step: 7,
            })
            .unwrap();
        assert_eq!(output, expected);

        let mut decoded = Vec::new();
        StreamingDecoder::new(&Codec::Base64, &mut decoded)
            .decode(&mut Trickle {
                data: &expected,
                step: 5,
            })
            .unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_invalid_window() {
        let mut sink = Vec::new();
        assert!(matches!(
            StreamingEncoder::new(&Codec::Base64, &mut sink).with_window(4),
            Err(crate::StreamError::Window { window: 4, group: 3 })
        ));
        assert!(matches!(
            StreamingDecoder::new(&Codec::Base64, &mut sink).with_window(6),
            Err(crate::StreamError::Window { window: 6, group: 4 })
        ));
        assert!(StreamingEncoder::new(&Codec::Base58, &mut sink).with_window(0).is_err());
    }

    #[test]
    fn test_decode_error_position_is_absolute() {
        let mut encoded = Codec::Base64.encode(&sample(300));
        encoded[250] = b'*';

        let mut sink = Vec::new();
        let err = StreamingDecoder::new(&Codec::Base64, &mut sink)
            .with_window(64)
            .unwrap()
            .decode(&mut Cursor::new(&encoded))
            .unwrap_err();
        match err {
            crate::StreamError::Decode(e) => assert_eq!(e.position(), 250),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_default_window() {
        assert_eq!(default_window(3), 768);
        assert_eq!(default_window(4), 768);
        assert_eq!(default_window(5), 765);
        assert_eq!(default_window(7), 763);
        assert_eq!(default_window(1), 768);
    }
}
