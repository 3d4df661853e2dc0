use std::io::{Read, Write};

use super::{StreamStats, check_window, decode_unit, default_window, fill_window};
use crate::StreamError;
use crate::encoders::algorithms::radix::RadixDecoder;
use crate::encoders::codec::Codec;

/// Streaming decoder for read-once sources of unknown length.
///
/// Mirrors [`StreamingEncoder`](super::StreamingEncoder): windows hold whole
/// symbol groups. For base64 the final, short window is cut down to a multiple
/// of four symbols, so a trailing newline or other stray bytes are ignored.
pub struct StreamingDecoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
    window: usize,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `codec` - The codec the input was encoded with
    /// * `writer` - The destination for decoded output
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingDecoder {
            codec,
            writer,
            window: default_window(decode_unit(codec)),
        }
    }

    /// Sets the window size in symbols.
    ///
    /// # Errors
    ///
    /// The window must be a non-zero multiple of the codec's group size in symbols.
    pub fn with_window(mut self, window: usize) -> Result<Self, StreamError> {
        self.window = check_window(window, decode_unit(self.codec))?;
        Ok(self)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Decodes everything `reader` yields and flushes the writer.
    ///
    /// Decode errors report positions counted from the start of the stream.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<StreamStats, StreamError> {
        let mut buffer = vec![0u8; self.window];
        let stats = match self.codec.group() {
            Some(_) => self.decode_windows(reader, &mut buffer)?,
            None => self.decode_accumulated(reader, &mut buffer)?,
        };
        self.writer.flush()?;

        log::debug!(
            "{}: decoded {} bytes into {} in {} window(s)",
            self.codec.describe(),
            stats.bytes_in,
            stats.bytes_out,
            stats.windows
        );
        Ok(stats)
    }

    fn decode_windows<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> Result<StreamStats, StreamError> {
        let mut stats = StreamStats::default();
        let mut output = Vec::with_capacity(buffer.len());

        loop {
            let filled = fill_window(reader, buffer)?;
            if filled == 0 {
                break;
            }

            output.clear();
            self.codec
                .decode_into(&buffer[..filled], &mut output)
                .map_err(|e| e.shifted(stats.bytes_in))?;
            self.writer.write_all(&output)?;

            stats.bytes_in += filled;
            stats.bytes_out += output.len();
            stats.windows += 1;
            log::trace!("window {}: {} -> {} bytes", stats.windows, filled, output.len());

            if filled < buffer.len() {
                break;
            }
        }

        Ok(stats)
    }

    fn decode_accumulated<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> Result<StreamStats, StreamError> {
        let mut stats = StreamStats::default();
        let mut decoder = RadixDecoder::new(self.codec.alphabet());

        loop {
            let filled = fill_window(reader, buffer)?;
            if filled == 0 {
                break;
            }

            decoder.extend(&buffer[..filled])?;
            stats.bytes_in += filled;
            stats.windows += 1;

            if filled < buffer.len() {
                break;
            }
        }

        let output = decoder.finish();
        self.writer.write_all(&output)?;
        stats.bytes_out = output.len();
        Ok(stats)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
