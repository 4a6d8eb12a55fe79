//! Byte frequency analysis over the 7-bit ASCII alphabet.

use crate::error::{Error, Result};
use crate::huffman::ALPHABET_SIZE;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Frequencies observed in a source, plus what was left out of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyReport {
    /// Occurrences of each byte value 0..=127
    pub frequencies: [u64; ALPHABET_SIZE],
    /// Every byte read, counted or not
    pub total_bytes: u64,
    /// Bytes >= 128, excluded from `frequencies`
    pub non_ascii: u64,
}

impl Default for FrequencyReport {
    fn default() -> Self {
        FrequencyReport {
            frequencies: [0; ALPHABET_SIZE],
            total_bytes: 0,
            non_ascii: 0,
        }
    }
}

impl FrequencyReport {
    /// Number of bytes that made it into the model.
    pub fn counted(&self) -> u64 {
        self.frequencies.iter().sum()
    }

    /// Number of distinct byte values observed.
    pub fn distinct(&self) -> usize {
        self.frequencies.iter().filter(|&&f| f > 0).count()
    }

    fn record(&mut self, byte: u8) {
        let offset = self.total_bytes;
        self.total_bytes += 1;
        match self.frequencies.get_mut(byte as usize) {
            Some(count) => *count += 1,
            None => {
                warn!("non-ASCII byte {} at offset {} excluded", byte, offset);
                self.non_ascii += 1;
            }
        }
    }
}

/// Counts the bytes of `reader`.
pub fn analyze_reader<R: Read>(mut reader: R) -> Result<FrequencyReport> {
    let mut report = FrequencyReport::default();
    let mut buf = [0u8; 8192];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        for &byte in &buf[..n] {
            report.record(byte);
        }
    }
    debug!(
        "analyzed {} bytes, {} distinct, {} non-ASCII",
        report.total_bytes,
        report.distinct(),
        report.non_ascii
    );
    Ok(report)
}

/// Counts the bytes of the file at `path`.
pub fn analyze(path: impl AsRef<Path>) -> Result<FrequencyReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::open_read(path, e))?;
    analyze_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_counts_each_byte() {
        let report = analyze_reader(&b"AAAAAAAAAABBBBBCCD"[..]).unwrap();
        assert_eq!(report.frequencies[b'A' as usize], 10);
        assert_eq!(report.frequencies[b'B' as usize], 5);
        assert_eq!(report.frequencies[b'C' as usize], 2);
        assert_eq!(report.frequencies[b'D' as usize], 1);
        assert_eq!(report.counted(), 18);
        assert_eq!(report.total_bytes, 18);
        assert_eq!(report.distinct(), 4);
        assert_eq!(report.non_ascii, 0);
    }

    #[test]
    fn test_excludes_non_ascii() {
        let data = [b'a', 200, b'b', 128, 255, 127, 0];
        let report = analyze_reader(&data[..]).unwrap();
        assert_eq!(report.non_ascii, 3);
        assert_eq!(report.total_bytes, 7);
        assert_eq!(report.counted(), report.total_bytes - report.non_ascii);
        assert_eq!(report.frequencies[127], 1);
        assert_eq!(report.frequencies[0], 1);
    }

    #[test]
    fn test_empty_input() {
        let report = analyze_reader(std::io::empty()).unwrap();
        assert_eq!(report, FrequencyReport::default());
    }

    #[test]
    fn test_analyze_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello, world\n").unwrap();
        file.flush().unwrap();
        let report = analyze(file.path()).unwrap();
        assert_eq!(report.frequencies[b'l' as usize], 3);
        assert_eq!(report.counted(), 13);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = analyze(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::FileOpen { mode: "reading", .. }));
    }
}
