//! The operation surface used by callers: build, load, compress, decompress.
//!
//! A [`Session`] owns at most one current code table together with the tree
//! rebuilt from it. Building or loading a table replaces both at once, and only
//! after the new pair is complete, so a failed load leaves the previous pair in
//! place.

use crate::config::{separate_from, Config};
use crate::error::{Error, Result};
use crate::huffman::{
    analyze, build_tree, generate_codes, load_code_table, save_table, CodeTable, FrequencyReport,
};
use crate::stream::{compress_file, decompress_file, CompressionStats, DecompressionStats};
use crate::tree::CodeTree;
use log::info;
use std::path::{Path, PathBuf};

/// A code table built from a source file, with the tree it came from.
#[derive(Debug, Clone)]
pub struct BuiltTable {
    pub table: CodeTable,
    pub tree: CodeTree,
    pub frequencies: FrequencyReport,
    /// Where the `.hi` file was written
    pub table_path: PathBuf,
}

/// Analyzes `source`, builds its Huffman code and writes the code table next
/// to it. An empty table suffix fails with [`Error::InvalidPath`].
pub fn build_code_table(source: impl AsRef<Path>, config: &Config) -> Result<BuiltTable> {
    let source = source.as_ref();
    let table_path = separate_from(source, config.table_path(source))?;
    let frequencies = analyze(source)?;
    let tree = build_tree(&frequencies.frequencies);
    let table = generate_codes(&tree);
    save_table(&table_path, &table)?;
    Ok(BuiltTable {
        table,
        tree,
        frequencies,
        table_path,
    })
}

#[derive(Debug, Clone)]
struct Loaded {
    table: CodeTable,
    tree: CodeTree,
}

/// Holds the current code table and tree across operations.
///
/// # Example
///
/// ```no_run
/// use ascii_huffman::Session;
///
/// let mut session = Session::new();
/// session.build_code_table("notes.txt")?;
/// let stats = session.compress("notes.txt")?;
/// println!("{}", stats);
/// session.decompress("notes.txt.hc")?;
/// # Ok::<(), ascii_huffman::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    current: Option<Loaded>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Session {
            config,
            current: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True when a table and tree are available for compression.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn table(&self) -> Option<&CodeTable> {
        self.current.as_ref().map(|loaded| &loaded.table)
    }

    pub fn tree(&self) -> Option<&CodeTree> {
        self.current.as_ref().map(|loaded| &loaded.tree)
    }

    /// Builds the code table of `source`, writes it to `source` + `.hi` and
    /// makes it current.
    pub fn build_code_table(&mut self, source: impl AsRef<Path>) -> Result<BuiltTable> {
        let built = build_code_table(source, &self.config)?;
        self.current = Some(Loaded {
            table: built.table.clone(),
            tree: built.tree.clone(),
        });
        Ok(built)
    }

    /// Loads a `.hi` file, rebuilds its tree and makes both current.
    pub fn load_code_table(&mut self, path: impl AsRef<Path>) -> Result<&CodeTable> {
        let path = path.as_ref();
        let (table, tree) = load_code_table(path)?;
        info!(
            "loaded {} codes from {}",
            table.assigned().count(),
            path.display()
        );
        let loaded = self.current.insert(Loaded { table, tree });
        Ok(&loaded.table)
    }

    /// Compresses `source` into `source` + `.hc` with the current table.
    pub fn compress(&self, source: impl AsRef<Path>) -> Result<CompressionStats> {
        let loaded = self.current.as_ref().ok_or(Error::MissingTree)?;
        compress_file(source, &loaded.table, &self.config)
    }

    /// Decompresses `compressed` with the current tree into the path with
    /// its last three characters removed.
    pub fn decompress(&self, compressed: impl AsRef<Path>) -> Result<DecompressionStats> {
        let loaded = self.current.as_ref().ok_or(Error::MissingTree)?;
        decompress_file(compressed, &loaded.tree, &self.config)
    }
}
