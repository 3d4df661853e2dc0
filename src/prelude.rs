//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use basex::prelude::*;
//!
//! let registry = AlgorithmRegistry::load_default().unwrap();
//! let codec = Codec::from_algorithm("b58", &registry).unwrap();
//! assert_eq!(encode(&[0, 0, 1], &codec), b"112");
//! ```

pub use crate::{
    // Config
    AlgorithmRegistry,

    // Core types
    Codec,
    DecodeError,
    DigitAlphabet,
    StreamError,

    // Streaming
    StreamStats,
    StreamingDecoder,
    StreamingEncoder,

    // Core encoding/decoding
    decode,
    encode,
};
