//! Filepath: src/node.rs
//!
//! Variable-arity tree model.
//!
//! [`TreeNode`] is a closed sum type: a leaf or an internal node with one to
//! four exclusively owned children. The whole tree is a value (no sharing, no
//! cycles) and is immutable after construction.
//!
//! # Weight
//!
//! The generator conserves one structural quantity: the *weight*, defined as
//! 0 for a leaf and `1 + sum of child weights` for an internal node (i.e. the
//! internal-node count). A tree built from a requested size `n` always has
//! weight exactly `n`. Plain leaf count is a different quantity and is exposed
//! separately as [`TreeNode::leaf_count`].

/// A node in a variable-arity tree.
///
/// Arity is fixed per variant (0 for [`Leaf`](TreeNode::Leaf), 1-4 for the
/// internal variants). Children are ordered and exclusively owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Terminal node; no children, no further recursion.
    Leaf,
    /// Internal node with exactly one child.
    One(Box<TreeNode>),
    /// Internal node with exactly two ordered children.
    Two(Box<TreeNode>, Box<TreeNode>),
    /// Internal node with exactly three ordered children.
    Three(Box<TreeNode>, Box<TreeNode>, Box<TreeNode>),
    /// Internal node with exactly four ordered children.
    Four(Box<TreeNode>, Box<TreeNode>, Box<TreeNode>, Box<TreeNode>),
}

impl TreeNode {
    /// Number of children this node owns (0-4).
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::One(..) => 1,
            Self::Two(..) => 2,
            Self::Three(..) => 3,
            Self::Four(..) => 4,
        }
    }

    /// Recursive weight: 0 for a leaf, `1 + sum of child weights` otherwise.
    ///
    /// Equals the internal-node count, and equals the size `n` the generator
    /// was asked for.
    #[must_use]
    pub fn weight(&self) -> usize {
        match self {
            Self::Leaf => 0,
            internal => 1 + internal.children().iter().map(|c| c.weight()).sum::<usize>(),
        }
    }

    /// Total number of nodes in the tree, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of leaves in the tree (1 for a lone leaf).
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf => 1,
            internal => internal.children().iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Children of this node in order, as a borrowed slice-like array view.
    ///
    /// Returns up to four references; leaves return an empty vector. Used by
    /// the structural helpers; the dispatch protocols walk children through
    /// `accept_children` instead and never allocate.
    fn children(&self) -> Vec<&Self> {
        match self {
            Self::Leaf => Vec::new(),
            Self::One(a) => vec![a],
            Self::Two(a, b) => vec![a, b],
            Self::Three(a, b, c) => vec![a, b, c],
            Self::Four(a, b, c, d) => vec![a, b, c, d],
        }
    }
}

/// Per-arity node histogram of a tree.
///
/// `counts[k]` is the number of nodes with exactly `k` children. Computed by
/// plain recursion, independently of either visitor protocol, so tests can
/// cross-check visitor-derived counts against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArityCounts {
    /// Node counts indexed by arity (0-4).
    pub counts: [u64; 5],
}

impl ArityCounts {
    /// Compute the histogram of `tree`.
    #[must_use]
    pub fn of(tree: &TreeNode) -> Self {
        let mut counts = Self::default();
        counts.add(tree);
        counts
    }

    fn add(&mut self, node: &TreeNode) {
        self.counts[node.arity()] += 1;
        for child in node.children() {
            self.add(child);
        }
    }

    /// Sum of counts over every arity; equals the total node count.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
