//! Code tables and their derivation from a tree.

use crate::huffman::ALPHABET_SIZE;
use crate::tree::{CodeTree, TreeNode};

/// Mapping from each byte value 0..=127 to its code, a string of '0' and '1'.
///
/// An empty code means the byte has no code assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<String>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeTable {
    /// Creates a table with every slot empty.
    pub fn new() -> Self {
        CodeTable {
            codes: vec![String::new(); ALPHABET_SIZE],
        }
    }

    /// Code for `byte`, or `None` when the slot is empty or out of range.
    pub fn get(&self, byte: u8) -> Option<&str> {
        self.codes
            .get(byte as usize)
            .map(String::as_str)
            .filter(|code| !code.is_empty())
    }

    /// Stores `code` for `byte`. Bytes outside the alphabet are ignored and
    /// `false` is returned.
    pub fn set(&mut self, byte: u8, code: impl Into<String>) -> bool {
        match self.codes.get_mut(byte as usize) {
            Some(slot) => {
                *slot = code.into();
                true
            }
            None => false,
        }
    }

    /// Iterates over all 128 slots in byte order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        (0u8..).zip(self.codes.iter().map(String::as_str))
    }

    /// Iterates over the slots holding a code.
    pub fn assigned(&self) -> impl Iterator<Item = (u8, &str)> {
        self.iter().filter(|(_, code)| !code.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.assigned().next().is_none()
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.iter().map(String::len).max().unwrap_or(0)
    }

    /// True when no assigned code is a proper prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.assigned().map(|(_, code)| code).collect();
        // After sorting, a code that prefixes others sorts right before them.
        codes.sort_unstable();
        codes
            .windows(2)
            .all(|pair| pair[0] == pair[1] || !pair[1].starts_with(pair[0]))
    }

    /// Number of payload bits needed to encode data with these frequencies.
    pub fn bit_length(&self, frequencies: &[u64; ALPHABET_SIZE]) -> u64 {
        self.codes
            .iter()
            .zip(frequencies.iter())
            .map(|(code, &freq)| code.len() as u64 * freq)
            .sum()
    }
}

/// Derives the code of every leaf by a depth-first walk of `tree`.
///
/// Descending left appends '0', descending right appends '1'.
pub fn generate_codes(tree: &CodeTree) -> CodeTable {
    let mut table = CodeTable::new();
    generate_codes_helper(tree.root(), &mut String::new(), &mut table);
    table
}

fn generate_codes_helper(node: &TreeNode, prefix: &mut String, table: &mut CodeTable) {
    if node.is_leaf() {
        table.set(node.symbol, prefix.as_str());
        return;
    }
    if let Some(left) = &node.left {
        prefix.push('0');
        generate_codes_helper(left, prefix, table);
        prefix.pop();
    }
    if let Some(right) = &node.right {
        prefix.push('1');
        generate_codes_helper(right, prefix, table);
        prefix.pop();
    }
}
