//! Bit-packed stream encoding and decoding.
//!
//! The compressed format is the concatenation of the codes of every source
//! byte, packed most significant bit first, then one byte counting the
//! meaningful bits of the last packed byte. There is no header; the code table
//! travels separately in a `.hi` file.

pub mod bits;
pub mod codec;

pub use bits::{BitReader, BitWriter};
pub use codec::{
    compress_file, decode, decompress_file, encode, CompressionStats, DecompressionStats,
};
