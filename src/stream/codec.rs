//! Compression and decompression of byte streams with a Huffman code.

use crate::config::{separate_from, Config};
use crate::error::{Error, Result};
use crate::huffman::CodeTable;
use crate::stream::bits::{BitReader, BitWriter};
use crate::tree::CodeTree;
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Sizes and ratios reported after compressing a source.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Meaningful bits in the output, excluding final padding
    pub payload_bits: u64,
    /// `input / output`, undefined when nothing was written
    pub compression_ratio: Option<f64>,
    /// `(1 - output / input) * 100`, undefined for an empty input
    pub space_saving_percent: Option<f64>,
}

impl CompressionStats {
    pub fn new(input_bytes: u64, output_bytes: u64, payload_bits: u64) -> Self {
        let compression_ratio =
            (output_bytes > 0).then(|| input_bytes as f64 / output_bytes as f64);
        let space_saving_percent =
            (input_bytes > 0).then(|| (1.0 - output_bytes as f64 / input_bytes as f64) * 100.0);
        CompressionStats {
            input_bytes,
            output_bytes,
            payload_bits,
            compression_ratio,
            space_saving_percent,
        }
    }
}

struct Figure(Option<f64>);

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.5}", value),
            None => f.write_str("undefined"),
        }
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input file size: {} bytes", self.input_bytes)?;
        writeln!(f, "Compressed file size: {} bytes", self.output_bytes)?;
        writeln!(f, "Compression ratio: {}", Figure(self.compression_ratio))?;
        let unit = if self.space_saving_percent.is_some() { " %" } else { "" };
        write!(
            f,
            "Space saving: {}{}",
            Figure(self.space_saving_percent),
            unit
        )
    }
}

/// Sizes reported after decompressing a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecompressionStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Recovered file, when decompressing from disk
    pub output_path: Option<PathBuf>,
}

/// Encodes every byte of `input` with `table` and writes the packed bits to
/// `output`, followed by the count of meaningful bits in the last packed byte.
/// An empty input produces an empty output.
///
/// A byte without a code fails with [`Error::UnencodableByte`]; whatever was
/// written before that point stays in `output`.
pub fn encode<R: Read, W: Write>(
    mut input: R,
    output: W,
    table: &CodeTable,
) -> Result<CompressionStats> {
    let mut writer = BitWriter::new(output);
    let mut input_bytes = 0u64;
    let mut output_bytes = 0u64;
    let mut buf = [0u8; 8192];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            let code = table.get(byte).ok_or_else(|| Error::UnencodableByte {
                byte,
                offset: input_bytes,
            })?;
            for bit in code.bytes() {
                output_bytes += writer.write_bit(bit == b'1')? as u64;
            }
            input_bytes += 1;
        }
    }
    let payload_bits = writer.bits_written();
    output_bytes += writer.finish()? as u64;

    let stats = CompressionStats::new(input_bytes, output_bytes, payload_bits);
    debug!(
        "encoded {} bytes into {} bits ({} bytes)",
        stats.input_bytes, stats.payload_bits, stats.output_bytes
    );
    Ok(stats)
}

/// Decodes the packed bits of `input` by walking `tree` and writes the
/// recovered bytes to `output`.
///
/// Decoding stops at the last meaningful bit, so padding is never decoded. A
/// bit leading off the tree fails with [`Error::InvalidBitPath`], and a stream
/// that ends partway through a code fails with [`Error::TruncatedCode`].
pub fn decode<R: Read, W: Write>(
    input: R,
    output: W,
    tree: &CodeTree,
) -> Result<DecompressionStats> {
    let mut reader = BitReader::new(input);
    let mut output = BufWriter::new(output);
    let root = tree.root();
    let mut node = root;
    let mut output_bytes = 0u64;

    while let Some(bit) = reader.read_bit()? {
        match node.child(bit) {
            Some(next) if next.is_leaf() => {
                output.write_all(&[next.symbol])?;
                output_bytes += 1;
                node = root;
            }
            Some(next) => node = next,
            None => {
                return Err(Error::InvalidBitPath {
                    bit_offset: reader.bits_read() - 1,
                })
            }
        }
    }
    if !std::ptr::eq(node, root) {
        return Err(Error::TruncatedCode {
            bits: reader.bits_read(),
        });
    }
    output.flush()?;

    let stats = DecompressionStats {
        input_bytes: reader.bytes_read(),
        output_bytes,
        output_path: None,
    };
    debug!(
        "decoded {} bytes from {} compressed bytes",
        stats.output_bytes, stats.input_bytes
    );
    Ok(stats)
}

/// Compresses the file at `source` into `source` + the compressed suffix.
/// Fails with [`Error::InvalidPath`] when the suffix is empty.
pub fn compress_file(
    source: impl AsRef<Path>,
    table: &CodeTable,
    config: &Config,
) -> Result<CompressionStats> {
    let source = source.as_ref();
    let target = separate_from(source, config.compressed_path(source))?;
    let input = File::open(source).map_err(|e| Error::open_read(source, e))?;
    let output = File::create(&target).map_err(|e| Error::open_write(&target, e))?;

    let stats = encode(BufReader::new(input), BufWriter::new(output), table)?;
    info!(
        "compressed {} ({} bytes) into {} ({} bytes)",
        source.display(),
        stats.input_bytes,
        target.display(),
        stats.output_bytes
    );
    Ok(stats)
}

/// Decompresses the file at `compressed` into the path with its suffix
/// removed (see [`Config::decompressed_path`]).
/// Fails with [`Error::InvalidPath`] when that path is `compressed` itself.
pub fn decompress_file(
    compressed: impl AsRef<Path>,
    tree: &CodeTree,
    config: &Config,
) -> Result<DecompressionStats> {
    let compressed = compressed.as_ref();
    let target = config.decompressed_path(compressed)?;
    let input = File::open(compressed).map_err(|e| Error::open_read(compressed, e))?;
    let output = File::create(&target).map_err(|e| Error::open_write(&target, e))?;

    let mut stats = decode(BufReader::new(input), output, tree)?;
    info!(
        "decompressed {} into {} ({} bytes)",
        compressed.display(),
        target.display(),
        stats.output_bytes
    );
    stats.output_path = Some(target);
    Ok(stats)
}
