//! Huffman compression for 7-bit ASCII files.
//!
//! A code is derived from the byte frequencies of a source file and stored as
//! a plain-text `.hi` table; the table (and the tree rebuilt from it) then
//! compresses files into bit-packed `.hc` streams and back.
//!
//! ```no_run
//! use ascii_huffman::Session;
//!
//! let mut session = Session::new();
//! session.build_code_table("book.txt")?;       // writes book.txt.hi
//! session.load_code_table("book.txt.hi")?;     // any earlier table is replaced
//! let stats = session.compress("book.txt")?;   // writes book.txt.hc
//! println!("{}", stats);
//! session.decompress("book.txt.hc")?;          // rewrites book.txt
//! # Ok::<(), ascii_huffman::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod huffman;
pub mod scheduler;
pub mod session;
pub mod stream;
pub mod tree;

pub use config::Config;
pub use error::{Error, Result};
pub use huffman::{load_code_table, CodeTable, FrequencyReport, ALPHABET_SIZE};
pub use scheduler::PriorityScheduler;
pub use session::{build_code_table, BuiltTable, Session};
pub use stream::{compress_file, decompress_file, CompressionStats, DecompressionStats};
pub use tree::{CodeTree, TreeNode};
