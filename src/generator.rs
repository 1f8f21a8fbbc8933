//! Filepath: src/generator.rs
//!
//! Deterministic random tree generator.
//!
//! Builds one tree of a requested weight `n` from a caller-supplied seeded
//! PRNG. The generator owns no RNG state of its own: the same `&mut R` is
//! threaded through the whole recursion, so a fixed seed reproduces the same
//! tree within one process and across runs.
//!
//! # Split algorithm
//!
//! For `n > 0`, pick an arity `k` uniformly in `[1, min(4, n)]`, draw `k - 1`
//! interior split points uniformly in `[0, n - 1)` (repetition allowed),
//! combine with the fixed boundary points `0` and `n - 1`, sort, and take
//! successive differences as the child weights. Duplicate split points are
//! legal and produce zero-weight spans that collapse to a [`TreeNode::Leaf`];
//! this skews the arity distribution slightly and is kept as-is so the
//! workload shape stays comparable across ports of this benchmark.
//!
//! # Determinism
//!
//! [`generate_seeded`] uses `ChaCha8Rng`, whose output stream is stable
//! across platforms and crate versions. Trees are NOT bit-identical to those
//! of other-language implementations of the same algorithm (different PRNG,
//! different draw sequence); only the structural invariants carry over:
//! `weight() == n` and every internal arity in 1..=4.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::node::TreeNode;

/// Build a random tree of weight `n` using `rng` for every draw.
///
/// `n == 0` returns a bare [`TreeNode::Leaf`] (the empty span).
///
/// # Panics
///
/// Panics if the internal split produces a sub-tree count different from the
/// chosen arity. That is a generator bug, not a runtime condition, so it is
/// a fatal assertion rather than a `Result`.
#[must_use]
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> TreeNode {
    if n == 0 {
        return TreeNode::Leaf;
    }

    let k = rng.gen_range(1..=n.min(4));

    // Boundary points first, then k - 1 interior points with duplicates
    // allowed. Sorted, the k successive differences sum to n - 1.
    let mut points = Vec::with_capacity(k + 1);
    points.push(0);
    points.push(n - 1);
    for _ in 1..k {
        points.push(rng.gen_range(0..n - 1));
    }
    points.sort_unstable();

    let subs: Vec<TreeNode> = points
        .windows(2)
        .map(|pair| generate(pair[1] - pair[0], rng))
        .collect();
    assert_eq!(subs.len(), k, "split produced a sub-tree count different from the chosen arity");

    let mut subs = subs.into_iter();
    let mut child = move || Box::new(subs.next().expect("sub-tree count checked against arity"));
    match k {
        1 => TreeNode::One(child()),
        2 => TreeNode::Two(child(), child()),
        3 => TreeNode::Three(child(), child(), child()),
        _ => TreeNode::Four(child(), child(), child(), child()),
    }
}

/// Build a random tree of weight `n` from a fresh `ChaCha8Rng` seeded with
/// `seed`.
///
/// Two calls with the same `n` and `seed` return structurally identical
/// trees.
#[must_use]
pub fn generate_seeded(n: usize, seed: u64) -> TreeNode {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(n, &mut rng)
}
