//! Example: Frog Jump with `k = 2`, comparing the memoized call graph with
//! the tabulated path.
//!
//! Run with:
//! `cargo run --example frog_jump`

use dp_replay::layout::{position_nodes, LayoutConfig};
use dp_replay::problems::frog_jump::{best_path, FrogJump};
use dp_replay::{Strategy, TracedProblem};

fn main() {
    let problem = FrogJump::new(vec![10, 5, 20, 0, 15], 2);

    let memoized = problem.solve(Strategy::Memoization);
    println!("Min energy (memoization): {}", memoized.answer());
    if let Some(graph) = memoized.graph() {
        let points = position_nodes(graph, &LayoutConfig::default());
        for (node, p) in graph.nodes.iter().zip(&points) {
            println!(
                "  {:<14} depth {} at ({:>5.1}, {:>5.1}) -> {:?}",
                node.label,
                node.depth,
                p.x,
                p.y,
                node.final_status()
            );
        }
    }

    let tabulated = problem.solve(Strategy::Tabulation);
    println!("Min energy (tabulation): {}", tabulated.answer());
    if let Some(table) = tabulated.table() {
        println!("Path: {:?}", best_path(table));
    }
}
