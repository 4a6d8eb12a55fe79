//! Greedy Huffman tree construction.

use crate::huffman::ALPHABET_SIZE;
use crate::scheduler::PriorityScheduler;
use crate::tree::{CodeTree, TreeNode};
use log::{debug, trace};

/// Builds the Huffman tree for the given frequencies.
///
/// Every byte value 0..=127 is seeded as a leaf, including those that never
/// occurred, so the result always has 128 leaves and 127 internal nodes. The
/// two lowest-priority trees are merged repeatedly, the first one removed
/// becoming the left child. Ties are broken in insertion order, leaves first by
/// ascending byte value, then merged trees in the order they were created.
pub fn build_tree(frequencies: &[u64; ALPHABET_SIZE]) -> CodeTree {
    let mut queue = PriorityScheduler::with_capacity(ALPHABET_SIZE);
    for (symbol, &freq) in (0u8..).zip(frequencies.iter()) {
        queue.insert(TreeNode::leaf(symbol, freq), freq);
    }

    while queue.len() > 1 {
        let (left, f1) = queue.remove_min_entry().expect("queue holds two trees");
        let (right, f2) = queue.remove_min_entry().expect("queue holds two trees");
        trace!("merge {} + {} -> {}", f1, f2, f1 + f2);
        queue.insert(TreeNode::internal(left, right), f1 + f2);
    }
    debug!("built Huffman tree with {} merges", ALPHABET_SIZE - 1);
    CodeTree::new(queue.remove_min().expect("queue is seeded with every byte value"))
}
