use std::io::{Read, Write};

use super::{StreamStats, check_window, default_window, encode_unit, fill_window};
use crate::StreamError;
use crate::encoders::algorithms::radix::RadixEncoder;
use crate::encoders::codec::Codec;

/// Streaming encoder for read-once sources of unknown length.
///
/// Input is copied into a fixed window that always holds whole groups, and
/// each full window is encoded and written before the next one is read, so
/// output for bit-packing codecs is produced incrementally. Repeated
/// accumulation has no group boundary: every window is folded into one
/// running number and the symbols are written once the source is exhausted.
pub struct StreamingEncoder<'a, W: Write> {
    codec: &'a Codec,
    writer: W,
    window: usize,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates a new streaming encoder.
    ///
    /// # Arguments
    ///
    /// * `codec` - The codec to encode with
    /// * `writer` - The destination for encoded output
    pub fn new(codec: &'a Codec, writer: W) -> Self {
        StreamingEncoder {
            codec,
            writer,
            window: default_window(encode_unit(codec)),
        }
    }

    /// Sets the window size in bytes.
    ///
    /// # Errors
    ///
    /// The window must be a non-zero multiple of the codec's group size in bytes.
    pub fn with_window(mut self, window: usize) -> Result<Self, StreamError> {
        self.window = check_window(window, encode_unit(self.codec))?;
        Ok(self)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Encodes everything `reader` yields and flushes the writer.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> Result<StreamStats, StreamError> {
        let mut buffer = vec![0u8; self.window];
        let stats = match self.codec.group() {
            Some(_) => self.encode_windows(reader, &mut buffer)?,
            None => self.encode_accumulated(reader, &mut buffer)?,
        };
        self.writer.flush()?;

        log::debug!(
            "{}: encoded {} bytes into {} in {} window(s)",
            self.codec.describe(),
            stats.bytes_in,
            stats.bytes_out,
            stats.windows
        );
        Ok(stats)
    }

    fn encode_windows<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> Result<StreamStats, StreamError> {
        let mut stats = StreamStats::default();
        let mut output = Vec::with_capacity(buffer.len() * 2);

        loop {
            let filled = fill_window(reader, buffer)?;
            if filled == 0 {
                break;
            }

            output.clear();
            self.codec.encode_into(&buffer[..filled], &mut output);
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

    fn encode_accumulated<R: Read>(
        &mut self,
        reader: &mut R,
        buffer: &mut [u8],
    ) -> Result<StreamStats, StreamError> {
        let mut stats = StreamStats::default();
        let mut encoder = RadixEncoder::new(self.codec.alphabet());

        loop {
            let filled = fill_window(reader, buffer)?;
            if filled == 0 {
                break;
            }

            encoder.extend(&buffer[..filled]);
            stats.bytes_in += filled;
            stats.windows += 1;

            if filled < buffer.len() {
                break;
            }
        }

        let output = encoder.finish();
        self.writer.write_all(&output)?;
        stats.bytes_out = output.len();
        Ok(stats)
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
