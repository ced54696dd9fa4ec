//! Example: trace Fibonacci under all three strategies and replay one.
//!
//! Run with:
//! `cargo run --example fibonacci`

use std::time::Duration;

use dp_replay::{problems::Fibonacci, Player, Strategy, TracedProblem};

fn main() {
    let problem = Fibonacci::new(6);

    for strategy in Strategy::ALL {
        let solution = problem.solve(strategy);
        let nodes = solution.graph().map_or(0, |g| g.len());
        println!(
            "{:<26} F(6) = {:<3} steps = {:<4} nodes = {}",
            strategy.name(),
            solution.answer(),
            solution.trace().len(),
            nodes
        );
    }

    // Replay the memoized solve, simulating a host that wakes every 100 ms.
    let mut player = Player::new();
    player.load(problem.solve(Strategy::Memoization));
    player.play();
    while player.is_playing() {
        player.advance(Duration::from_millis(100));
    }

    println!();
    if let Some(view) = player.view() {
        for record in view.visible {
            println!(
                "[{}] {:<16} {:<24} {}",
                record.timestamp_label(),
                record.kind.label(),
                record.action,
                record.description
            );
        }
    }
}
