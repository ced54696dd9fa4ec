//! Example: House Robber by tabulation, with the robbed houses recovered
//! from the table's recorded choices.
//!
//! Run with:
//! `cargo run --example house_robber`

use dp_replay::problems::house_robber::{robbed_houses, HouseRobber};
use dp_replay::{Strategy, TracedProblem};

fn main() {
    let houses = vec![2, 7, 9, 3, 1];
    let solution = HouseRobber::new(houses.clone()).solve(Strategy::Tabulation);

    println!("Houses: {houses:?}");
    println!("Best haul: {}", solution.answer());

    let Some(table) = solution.table() else {
        return;
    };
    println!("dp: {:?}", table.cells());
    let robbed = robbed_houses(table);
    let haul: i64 = robbed.iter().map(|&i| houses[i]).sum();
    println!("Robbed houses: {robbed:?} (sum {haul})");

    for record in solution.trace() {
        println!("{:>2}. {:<10} {}", record.step, record.kind.label(), record.action);
    }
}
