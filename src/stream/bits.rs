//! Bit-level I/O over byte streams.
//!
//! Bits are packed most significant first. A finished stream ends with one
//! extra byte holding how many bits of the last packed byte are meaningful
//! (1 to 8); the rest of that byte is zero padding. A stream with no bits at
//! all is empty and has no such byte.

use bitvec::prelude::*;
use std::io::{self, Bytes, Read, Write};
use std::iter::Peekable;

/// Packs single bits into bytes and writes them to `W`.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    buffer: BitArray<[u8; 1], Msb0>,
    count: usize,
    bytes_written: u64,
    bits_written: u64,
    finished: bool,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            buffer: BitArray::ZERO,
            count: 0,
            bytes_written: 0,
            bits_written: 0,
            finished: false,
        }
    }

    /// Appends one bit. Returns the number of bytes emitted (0 or 1).
    pub fn write_bit(&mut self, bit: bool) -> io::Result<usize> {
        self.buffer.set(self.count, bit);
        self.count += 1;
        self.bits_written += 1;
        if self.count == 8 {
            self.emit()?;
            return Ok(1);
        }
        Ok(0)
    }

    /// Ends the stream and flushes the underlying writer.
    ///
    /// Buffered bits go out as a zero-padded byte, followed by the count of
    /// meaningful bits in the last packed byte. Nothing is written when no bit
    /// was. Returns the number of bytes emitted; later calls emit nothing.
    pub fn finish(&mut self) -> io::Result<usize> {
        if self.finished {
            return Ok(0);
        }
        self.finished = true;

        let mut emitted = 0;
        if self.bits_written > 0 {
            let last_bits = match self.count {
                0 => 8,
                n => n as u8,
            };
            if self.count > 0 {
                self.emit()?;
                emitted += 1;
            }
            self.inner.write_all(&[last_bits])?;
            self.bytes_written += 1;
            emitted += 1;
        }
        self.inner.flush()?;
        Ok(emitted)
    }

    /// Bits currently held, awaiting a full byte.
    pub fn pending_bits(&self) -> usize {
        self.count
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Returns the underlying writer. Pending bits are discarded.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn emit(&mut self) -> io::Result<()> {
        self.inner.write_all(self.buffer.as_raw_slice())?;
        self.buffer = BitArray::ZERO;
        self.count = 0;
        self.bytes_written += 1;
        Ok(())
    }
}

/// Reads back the bits of a stream written by [`BitWriter`], most
/// significant first, stopping at the last meaningful bit.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    bytes: Peekable<Bytes<R>>,
    // Byte pulled ahead to check whether the one after it is the bit count
    lookahead: Option<u8>,
    current: u8,
    position: usize,
    limit: usize,
    bits_read: u64,
    bytes_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Wraps `inner`. Reads are byte by byte, so `inner` should be buffered.
    pub fn new(inner: R) -> Self {
        BitReader {
            bytes: inner.bytes().peekable(),
            lookahead: None,
            current: 0,
            position: 0,
            limit: 0,
            bits_read: 0,
            bytes_read: 0,
        }
    }

    /// Next bit, or `None` once every meaningful bit has been read.
    ///
    /// A stream whose final bit count is missing or outside 1..=8 fails with
    /// [`io::ErrorKind::InvalidData`].
    pub fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.position == self.limit && !self.load()? {
            return Ok(None);
        }
        let bit = self.current.view_bits::<Msb0>()[self.position];
        self.position += 1;
        self.bits_read += 1;
        Ok(Some(bit))
    }

    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Bytes consumed so far, including the final bit count.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn load(&mut self) -> io::Result<bool> {
        let byte = match self.lookahead.take() {
            Some(byte) => byte,
            None => match self.bytes.next() {
                Some(byte) => byte?,
                None => return Ok(false),
            },
        };
        let next = match self.bytes.next() {
            Some(next) => next?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "compressed stream has a bit count but no packed bits",
                ))
            }
        };

        self.current = byte;
        self.position = 0;
        self.bytes_read += 1;
        if self.bytes.peek().is_some() {
            self.lookahead = Some(next);
            self.limit = 8;
        } else {
            if !(1..=8).contains(&next) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("final bit count {} is outside 1..=8", next),
                ));
            }
            self.limit = next as usize;
            self.bytes_read += 1;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_bits(bits: &str) -> (Vec<u8>, usize) {
        let mut writer = BitWriter::new(Vec::new());
        let mut emitted = 0;
        for c in bits.chars() {
            emitted += writer.write_bit(c == '1').unwrap();
        }
        emitted += writer.finish().unwrap();
        assert_eq!(writer.bytes_written() as usize, emitted);
        (writer.into_inner(), emitted)
    }

    fn read_bits(bytes: &[u8]) -> io::Result<String> {
        let mut reader = BitReader::new(bytes);
        let mut bits = String::new();
        while let Some(bit) = reader.read_bit()? {
            bits.push(if bit { '1' } else { '0' });
        }
        Ok(bits)
    }

    #[test]
    fn test_msb_first_packing() {
        let (bytes, emitted) = write_bits("10000001");
        assert_eq!(bytes, vec![0x81, 8]);
        assert_eq!(emitted, 2);

        let (bytes, _) = write_bits("0100000111000011");
        assert_eq!(bytes, vec![0x41, 0xC3, 8]);
    }

    #[test]
    fn test_finish_pads_and_counts_last_bits() {
        let (bytes, emitted) = write_bits("101");
        assert_eq!(bytes, vec![0b1010_0000, 3]);
        assert_eq!(emitted, 2);

        let (bytes, emitted) = write_bits("111111111");
        assert_eq!(bytes, vec![0xFF, 0x80, 1]);
        assert_eq!(emitted, 3);
    }

    #[test]
    fn test_finish_without_bits_writes_nothing() {
        let (bytes, emitted) = write_bits("");
        assert!(bytes.is_empty());
        assert_eq!(emitted, 0);

        let (bytes, emitted) = write_bits("00000000");
        assert_eq!(bytes, vec![0, 8]);
        assert_eq!(emitted, 2);
    }

    #[test]
    fn test_finish_twice_is_a_no_op() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bit(true).unwrap();
        assert_eq!(writer.finish().unwrap(), 2);
        assert_eq!(writer.finish().unwrap(), 0);
        assert_eq!(writer.into_inner(), vec![0x80, 1]);
    }

    #[test]
    fn test_write_bit_reports_completed_bytes() {
        let mut writer = BitWriter::new(Vec::new());
        for _ in 0..7 {
            assert_eq!(writer.write_bit(true).unwrap(), 0);
        }
        assert_eq!(writer.pending_bits(), 7);
        assert_eq!(writer.write_bit(true).unwrap(), 1);
        assert_eq!(writer.pending_bits(), 0);
        assert_eq!(writer.bits_written(), 8);
    }

    #[test]
    fn test_reader_msb_first() {
        let data = [0b1010_0001u8, 0b0000_0001, 8];
        let mut reader = BitReader::new(&data[..]);
        let mut bits = String::new();
        while let Some(bit) = reader.read_bit().unwrap() {
            bits.push(if bit { '1' } else { '0' });
        }
        assert_eq!(bits, "1010000100000001");
        assert_eq!(reader.bits_read(), 16);
        assert_eq!(reader.bytes_read(), 3);
        assert_eq!(reader.read_bit().unwrap(), None);
    }

    #[test]
    fn test_reader_stops_before_padding() {
        assert_eq!(read_bits(&[0b1011_1111, 3]).unwrap(), "101");
        assert_eq!(read_bits(&[0xFF, 0x00, 1]).unwrap(), "111111110");
    }

    #[test]
    fn test_reader_empty() {
        let mut reader = BitReader::new(io::empty());
        assert_eq!(reader.read_bit().unwrap(), None);
        assert_eq!(reader.bytes_read(), 0);
    }

    #[test]
    fn test_reader_rejects_bad_bit_count() {
        for data in [&[8u8][..], &[0xAB, 0][..], &[0xAB, 9][..], &[0xAB, 0xCD, 200][..]] {
            let err = read_bits(data).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{:?}", data);
        }
    }

    #[test]
    fn test_writer_reader_agree() {
        for pattern in ["1", "1101001110001011101", "0000000000000000"] {
            let (bytes, _) = write_bits(pattern);
            assert_eq!(read_bits(&bytes).unwrap(), pattern);
        }
    }
}
