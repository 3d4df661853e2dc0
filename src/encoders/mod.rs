pub mod algorithms;
pub mod codec;
pub mod streaming;
