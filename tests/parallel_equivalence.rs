#![cfg(feature = "parallel")]

use dp_replay::problems::{Fibonacci, FrogJump, HouseRobber, Problem};
use dp_replay::verify::cross_check;
use dp_replay::Strategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn parallel_cross_check_matches_sequential_solves() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut problems: Vec<Problem> = (1..=20).map(|n| Fibonacci::new(n).into()).collect();
    for _ in 0..20 {
        let len = rng.gen_range(1..=7);
        let houses = (0..len).map(|_| rng.gen_range(0..100)).collect();
        problems.push(HouseRobber::new(houses).into());
        let heights: Vec<i64> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
        let k = rng.gen_range(1..=4usize).min(len);
        problems.push(FrogJump::new(heights, k).into());
    }

    for problem in &problems {
        let check = cross_check(problem);
        for strategy in Strategy::ALL {
            assert_eq!(check.get(strategy), problem.solve(strategy).answer(), "{problem:?}");
        }
        assert!(check.agrees());
    }
}
