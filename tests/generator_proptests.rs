//! Property-based tests for the `generator` module.
//!
//! These verify the structural invariants every generated tree must satisfy,
//! regardless of seed: conserved weight, arity bounds, and same-seed
//! determinism.

use proptest::prelude::*;
use visitree::TreeNode;
use visitree::generator::generate_seeded;
use visitree::node::ArityCounts;

mod common;

/// Largest weight exercised per proptest case; big enough for every arity to
/// appear, small enough to keep the suite fast.
const MAX_WEIGHT: usize = 2_048;

// ============================================================================
//  Helpers
// ============================================================================

/// Every internal node must have between 1 and 4 children; a leaf has none.
fn arity_in_bounds(node: &TreeNode) -> bool {
    match node {
        TreeNode::Leaf => true,
        TreeNode::One(a) => arity_in_bounds(a),
        TreeNode::Two(a, b) => arity_in_bounds(a) && arity_in_bounds(b),
        TreeNode::Three(a, b, c) => {
            arity_in_bounds(a) && arity_in_bounds(b) && arity_in_bounds(c)
        }
        TreeNode::Four(a, b, c, d) => {
            arity_in_bounds(a) && arity_in_bounds(b) && arity_in_bounds(c) && arity_in_bounds(d)
        }
    }
}

// ============================================================================
//  Structural invariants
// ============================================================================

proptest! {
    /// The recursive weight of a generated tree equals the requested size.
    #[test]
    fn weight_is_conserved(n in 0..=MAX_WEIGHT, seed in any::<u64>()) {
        let tree = generate_seeded(n, seed);
        prop_assert_eq!(tree.weight(), n);
    }

    /// Arity never leaves 0..=4, and 0 only at leaves (by construction of
    /// the sum type, checked here over the full tree).
    #[test]
    fn arity_stays_in_bounds(n in 0..=MAX_WEIGHT, seed in any::<u64>()) {
        let tree = generate_seeded(n, seed);
        prop_assert!(arity_in_bounds(&tree));
    }

    /// Total node count splits into internal nodes (the weight) plus leaves.
    #[test]
    fn node_count_decomposes(n in 0..=MAX_WEIGHT, seed in any::<u64>()) {
        let tree = generate_seeded(n, seed);
        prop_assert_eq!(tree.node_count(), tree.weight() + tree.leaf_count());
    }

    /// The arity histogram accounts for every node exactly once.
    #[test]
    fn histogram_total_is_node_count(n in 0..=MAX_WEIGHT, seed in any::<u64>()) {
        let tree = generate_seeded(n, seed);
        let hist = ArityCounts::of(&tree);
        prop_assert_eq!(hist.total(), tree.node_count() as u64);
    }

    /// Same seed, same size: structurally identical trees. `TreeNode` is a
    /// value type, so `==` is the isomorphism check.
    #[test]
    fn same_seed_is_deterministic(n in 0..=MAX_WEIGHT, seed in any::<u64>()) {
        prop_assert_eq!(generate_seeded(n, seed), generate_seeded(n, seed));
    }
}

// ============================================================================
//  Fixed cases
// ============================================================================

#[test]
fn zero_weight_is_a_lone_leaf() {
    common::init_tracing();
    let tree = generate_seeded(0, 239);
    assert_eq!(tree, TreeNode::Leaf);
    assert_eq!(tree.leaf_count(), 1);
}

/// Reference example: seed 239, weight 10.
#[test]
fn reference_ten_node_tree() {
    common::init_tracing();
    let tree = generate_seeded(10, 239);
    assert_eq!(tree.weight(), 10);
    assert!(arity_in_bounds(&tree));
}

/// A large tree still satisfies the invariants (and the recursion depth the
/// split distribution produces stays comfortably within the stack).
#[test]
fn large_tree_smoke() {
    let tree = generate_seeded(100_000, 239);
    assert_eq!(tree.weight(), 100_000);
    assert_eq!(tree.node_count(), tree.weight() + tree.leaf_count());
}
