use dp_replay::problems::{FrogJump, HouseRobber, Problem};
use dp_replay::verify::cross_check;
use dp_replay::Strategy as SolveStrategy;
use proptest::prelude::*;

fn rob_reference(houses: &[i64]) -> i64 {
    let (mut take, mut skip) = (0i64, 0i64);
    for &h in houses {
        (take, skip) = (skip + h, take.max(skip));
    }
    take.max(skip)
}

fn frog_reference(heights: &[i64], k: usize) -> i64 {
    let mut dp = vec![0i64; heights.len()];
    for i in 1..heights.len() {
        dp[i] = (i.saturating_sub(k)..i)
            .map(|j| dp[j] + (heights[i] - heights[j]).abs())
            .min()
            .unwrap_or(0);
    }
    dp[heights.len() - 1]
}

proptest! {
    #[test]
    fn house_robber_strategies_agree(houses in prop::collection::vec(0i64..100, 0usize..=7)) {
        let expected = rob_reference(&houses);
        let problem: Problem = HouseRobber::new(houses).into();
        let check = cross_check(&problem);
        prop_assert!(check.agrees());
        prop_assert_eq!(check.answer(), Some(expected));
    }

    #[test]
    fn frog_jump_strategies_agree(
        heights in prop::collection::vec(-50i64..50, 1usize..=7),
        k in 1usize..=4,
    ) {
        let k = k.min(heights.len());
        let expected = frog_reference(&heights, k);
        let problem: Problem = FrogJump::new(heights, k).into();
        for strategy in SolveStrategy::ALL {
            let solution = problem.solve(strategy);
            prop_assert_eq!(solution.answer(), expected);
            prop_assert_eq!(solution.structural_answer(), Some(expected));
        }
    }
}
