//! # visitree
//!
//! Micro-benchmark harness comparing two renditions of double-dispatch tree
//! traversal over the same variable-arity tree:
//!
//! - **Classic**: a non-generic [`Visitor`](visitor::Visitor) with default
//!   traversal behavior, driven through `&mut dyn Visitor` (a vtable call per
//!   node).
//! - **Generic**: a [`DataVisitor<T>`](data_visitor::DataVisitor) threading a
//!   read-only payload through the traversal, plus a no-payload
//!   [`UnitVisitor`](data_visitor::UnitVisitor) specialization, driven
//!   monomorphized.
//!
//! Both protocols share one dispatch shape: the node routes to the visitor
//! method matching its own variant, and every method defaults to "visit my
//! children through this same visitor". Identical overrides must produce
//! identical traversals under either protocol; the test suite pins that
//! equivalence against an independently computed arity histogram.
//!
//! The workload is deterministic end to end: a seeded ChaCha8 stream drives
//! [`generator::generate`], the tree is built once, and each measured run
//! walks it with transient counting visitors and returns an aggregate count
//! for the harness to black-box.
//!
//! ```rust
//! use visitree::Workload;
//!
//! let workload = Workload::new(10_000, 239);
//! assert_eq!(workload.run_classic(), workload.run_generic());
//! ```
//!
//! Timing, warm-up, and iteration policy live in `benches/dispatch.rs`
//! (divan); this crate owns only the tree model, the generator, the two
//! dispatch protocols, and the counting workload. Everything is
//! single-threaded and pure; the only failure mode is a fatal
//! generator-invariant assertion.

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod data_visitor;
pub mod generator;
pub mod node;
pub mod visitor;
pub mod workload;

mod tracing_helpers;

pub use node::TreeNode;
pub use workload::Workload;
