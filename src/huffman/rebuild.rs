//! Reconstruction of a decoding tree from a code table.

use crate::error::{Error, Result};
use crate::huffman::codes::CodeTable;
use crate::tree::{CodeTree, TreeNode};

/// Rebuilds a tree in which following each code from the root reaches a node
/// carrying that code's byte.
///
/// Only nodes on some code path are created, so the result need not be full.
/// Fails with [`Error::InvalidCodeCharacter`] if a code contains anything but
/// '0' or '1'.
pub fn rebuild_tree(table: &CodeTable) -> Result<CodeTree> {
    let mut tree = CodeTree::new(TreeNode::sentinel());
    for (symbol, code) in table.assigned() {
        let mut node = tree.root_mut();
        for (position, ch) in code.chars().enumerate() {
            let slot = match ch {
                '0' => &mut node.left,
                '1' => &mut node.right,
                found => {
                    return Err(Error::InvalidCodeCharacter {
                        symbol,
                        found,
                        position,
                    })
                }
            };
            node = slot
                .get_or_insert_with(|| Box::new(TreeNode::sentinel()))
                .as_mut();
        }
        node.symbol = symbol;
    }
    Ok(tree)
}
