//! Owned binary tree describing a Huffman code.
//!
//! Each node exclusively owns its children through `Box`, so a [`CodeTree`] is
//! a strict tree: no sharing, no back-references. Cloning a tree deep-copies
//! every node and dropping it releases them all.

/// Symbol stored on nodes that do not represent a byte.
pub const SENTINEL: u8 = 0;

/// A node of a Huffman tree.
///
/// A node is a leaf iff both children are absent. Trees produced by the
/// builder never contain a node with exactly one child; trees rebuilt from a
/// code table may.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Byte value, meaningful only on leaves
    pub symbol: u8,
    /// Total frequency of the subtree, informational after construction
    pub frequency: u64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a leaf for `symbol`.
    pub fn leaf(symbol: u8, frequency: u64) -> Self {
        TreeNode {
            symbol,
            frequency,
            left: None,
            right: None,
        }
    }

    /// Creates an internal node owning both subtrees.
    pub fn internal(left: TreeNode, right: TreeNode) -> Self {
        TreeNode {
            symbol: SENTINEL,
            frequency: left.frequency + right.frequency,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Creates a childless placeholder carrying the sentinel symbol.
    pub fn sentinel() -> Self {
        TreeNode::leaf(SENTINEL, 0)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the child selected by `bit` (`false` = left, `true` = right).
    pub fn child(&self, bit: bool) -> Option<&TreeNode> {
        if bit {
            self.right.as_deref()
        } else {
            self.left.as_deref()
        }
    }

    fn walk(&self, visit: &mut impl FnMut(&TreeNode)) {
        visit(self);
        if let Some(left) = &self.left {
            left.walk(visit);
        }
        if let Some(right) = &self.right {
            right.walk(visit);
        }
    }
}

/// A Huffman tree owning exactly one root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Box<TreeNode>,
}

impl CodeTree {
    pub fn new(root: TreeNode) -> Self {
        CodeTree {
            root: Box::new(root),
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TreeNode {
        &mut self.root
    }

    /// Total frequency recorded on the root.
    pub fn root_frequency(&self) -> u64 {
        self.root.frequency
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.root.walk(&mut |_: &TreeNode| n += 1);
        n
    }

    pub fn leaf_count(&self) -> usize {
        let mut n = 0;
        self.root.walk(&mut |node: &TreeNode| {
            if node.is_leaf() {
                n += 1;
            }
        });
        n
    }

    pub fn internal_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }

    /// True when every internal node has exactly two children.
    pub fn is_full(&self) -> bool {
        let mut full = true;
        self.root.walk(&mut |node: &TreeNode| {
            if node.left.is_some() != node.right.is_some() {
                full = false;
            }
        });
        full
    }

    /// Symbols of all leaves in left-to-right order.
    pub fn leaf_symbols(&self) -> Vec<u8> {
        let mut symbols = Vec::new();
        self.root.walk(&mut |node: &TreeNode| {
            if node.is_leaf() {
                symbols.push(node.symbol);
            }
        });
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodeTree {
        let ab = TreeNode::internal(TreeNode::leaf(b'a', 1), TreeNode::leaf(b'b', 2));
        CodeTree::new(TreeNode::internal(ab, TreeNode::leaf(b'c', 4)))
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.internal_count(), 2);
        assert_eq!(tree.root_frequency(), 7);
        assert!(tree.is_full());
        assert_eq!(tree.leaf_symbols(), vec![b'a', b'b', b'c']);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.root_mut().left = None;
        assert_ne!(copy, original);
        assert_eq!(original.node_count(), 5);
        assert_eq!(copy.node_count(), 2);
    }

    #[test]
    fn test_child_selection() {
        let tree = sample();
        let right = tree.root().child(true).unwrap();
        assert!(right.is_leaf());
        assert_eq!(right.symbol, b'c');
        let left = tree.root().child(false).unwrap();
        assert!(!left.is_leaf());
        assert_eq!(left.child(false).unwrap().symbol, b'a');
    }

    #[test]
    fn test_single_child_node_is_not_full() {
        let mut root = TreeNode::sentinel();
        root.left = Some(Box::new(TreeNode::leaf(b'x', 0)));
        let tree = CodeTree::new(root);
        assert!(!tree.is_full());
        assert!(!tree.root().is_leaf());
        assert!(tree.root().child(true).is_none());
    }
}
