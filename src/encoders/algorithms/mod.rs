pub mod base58;
pub mod base64;
pub mod chunked;
pub mod errors;
pub mod radix;
