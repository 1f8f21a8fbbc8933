//! Debug binary for the traversal workload.
//!
//! Builds the reference tree, prints its structural stats, and wall-clock
//! times a few runs of each dispatch protocol. This is a smoke check, not a
//! measurement; real numbers come from `cargo bench --bench dispatch`.

use std::time::Instant;

use visitree::Workload;
use visitree::node::ArityCounts;
use visitree::workload::{DEFAULT_SEED, DEFAULT_WEIGHT};

const RUNS: u32 = 5;

fn main() {
    let build_start = Instant::now();
    let workload = Workload::new(DEFAULT_WEIGHT, DEFAULT_SEED);
    let build_time = build_start.elapsed();

    let tree = workload.tree();
    let hist = ArityCounts::of(tree);

    println!("tree weight {DEFAULT_WEIGHT}, seed {DEFAULT_SEED}");
    println!("  built in        {build_time:?}");
    println!("  nodes           {}", tree.node_count());
    println!("  leaves          {}", tree.leaf_count());
    println!("  arity histogram {:?}", hist.counts);

    let classic_start = Instant::now();
    let mut classic = 0;
    for _ in 0..RUNS {
        classic = workload.run_classic();
    }
    let classic_time = classic_start.elapsed();

    let generic_start = Instant::now();
    let mut generic = 0;
    for _ in 0..RUNS {
        generic = workload.run_generic();
    }
    let generic_time = generic_start.elapsed();

    assert_eq!(classic, generic, "protocols disagree on the aggregate count");

    println!("aggregate count {classic} ({RUNS} runs per protocol)");
    println!(
        "  classic (dyn)     {:?}/run",
        classic_time / RUNS
    );
    println!(
        "  generic (mono)    {:?}/run",
        generic_time / RUNS
    );
}
