//! Huffman model: frequencies, tree construction, code tables and their
//! `.hi` file format.
//!
//! # Examples
//!
//! ```rust
//! use ascii_huffman::huffman::{analyze_reader, build_tree, generate_codes, rebuild_tree};
//!
//! let report = analyze_reader(&b"abracadabra"[..]).unwrap();
//! let table = generate_codes(&build_tree(&report.frequencies));
//! assert!(table.is_prefix_free());
//!
//! let tree = rebuild_tree(&table).unwrap();
//! assert_eq!(tree.leaf_count(), 128);
//! ```

use crate::error::Result;
use crate::tree::CodeTree;
use std::path::Path;

/// Number of byte values in the model (7-bit ASCII).
pub const ALPHABET_SIZE: usize = 128;

pub mod builder;
pub mod codes;
pub mod frequency;
pub mod rebuild;
pub mod table_file;

pub use builder::build_tree;
pub use codes::{generate_codes, CodeTable};
pub use frequency::{analyze, analyze_reader, FrequencyReport};
pub use rebuild::rebuild_tree;
pub use table_file::{load_table, read_table, save_table, write_table};

/// Loads a `.hi` file and rebuilds the tree its codes describe.
pub fn load_code_table(path: impl AsRef<Path>) -> Result<(CodeTable, CodeTree)> {
    let table = load_table(path)?;
    let tree = rebuild_tree(&table)?;
    Ok((table, tree))
}
