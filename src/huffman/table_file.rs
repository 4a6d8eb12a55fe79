//! Reading and writing the `.hi` code table format.
//!
//! A `.hi` file is plain text. The first line is reserved and left blank; it is
//! followed by one line per byte value 0..=127 in ascending order, each holding
//! the decimal byte value, whitespace, and the code (possibly empty):
//!
//! ```text
//!
//! 0    0000000000
//! 1    0000000001
//! ...
//! 65    1
//! ```
//!
//! When reading, lines with no code and missing lines both leave the slot
//! empty.

use crate::error::{Error, Result};
use crate::huffman::codes::CodeTable;
use crate::huffman::ALPHABET_SIZE;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Separator written between the byte value and its code.
const SEPARATOR: &str = "    ";

/// Writes `table` in `.hi` format.
pub fn write_table<W: Write>(mut writer: W, table: &CodeTable) -> Result<()> {
    writeln!(writer)?;
    for (byte, code) in table.iter() {
        writeln!(writer, "{}{}{}", byte, SEPARATOR, code)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a table in `.hi` format.
pub fn read_table<R: BufRead>(reader: R) -> Result<CodeTable> {
    let mut table = CodeTable::new();
    // Line 1 is reserved.
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = index + 1;
        let mut fields = line.split_whitespace();
        let Some(byte) = fields.next() else {
            continue;
        };
        let byte: u8 = byte
            .parse()
            .ok()
            .filter(|&b: &u8| (b as usize) < ALPHABET_SIZE)
            .ok_or_else(|| Error::MalformedTable {
                line: line_no,
                reason: format!("{:?} is not a byte value in 0..=127", byte),
            })?;
        let code = fields.next().unwrap_or("");
        if let Some(extra) = fields.next() {
            return Err(Error::MalformedTable {
                line: line_no,
                reason: format!("unexpected trailing field {:?}", extra),
            });
        }
        table.set(byte, code);
    }
    Ok(table)
}

/// Writes `table` to the file at `path`, replacing any previous content.
pub fn save_table(path: impl AsRef<Path>, table: &CodeTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::open_write(path, e))?;
    write_table(BufWriter::new(file), table)?;
    info!("code table written to {}", path.display());
    Ok(())
}

/// Reads a table from the file at `path`.
pub fn load_table(path: impl AsRef<Path>) -> Result<CodeTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::open_read(path, e))?;
    read_table(BufReader::new(file))
}
