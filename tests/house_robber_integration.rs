use dp_replay::graph::Choice;
use dp_replay::problems::house_robber::{robbed_houses, HouseRobber};
use dp_replay::{StepKind, Strategy, TracedProblem};

fn valid_selection(robbed: &[usize], n: usize) -> bool {
    robbed.iter().all(|&i| i < n) && robbed.windows(2).all(|w| w[1] >= w[0] + 2)
}

#[test]
fn classic_street() {
    let houses = vec![2, 7, 9, 3, 1];
    let solution = HouseRobber::new(houses.clone()).solve(Strategy::Tabulation);
    assert_eq!(solution.answer(), 12);

    let table = solution.table().expect("table");
    let robbed = robbed_houses(table);
    assert!(valid_selection(&robbed, houses.len()));
    assert_eq!(robbed.iter().map(|&i| houses[i]).sum::<i64>(), 12);
    assert_eq!(table.choice(0), Some(Choice::Rob));
}

#[test]
fn tabulation_runs_right_to_left() {
    let solution = HouseRobber::new(vec![1, 2, 3, 1]).solve(Strategy::Tabulation);
    assert_eq!(solution.answer(), 4);
    let subjects: Vec<_> = solution
        .trace()
        .iter()
        .filter(|r| r.kind == StepKind::Tabulate)
        .map(|r| r.subject)
        .collect();
    assert_eq!(subjects, [Some(2), Some(1), Some(0)]);
}

#[test]
fn empty_street() {
    let p = HouseRobber::new(Vec::new());
    for strategy in Strategy::ALL {
        assert_eq!(p.solve(strategy).answer(), 0, "via {strategy}");
    }
    assert!(p.solve(Strategy::Recursive).trace().is_empty());
    let tab = p.solve(Strategy::Tabulation);
    assert_eq!(tab.trace().len(), 1);
    assert_eq!(tab.trace().records()[0].subject, None);
}

#[test]
fn memoization_reuses_suffixes() {
    let p = HouseRobber::new(vec![5, 5, 10, 100, 10, 5, 5]);
    let rec = p.solve(Strategy::Recursive);
    let memo = p.solve(Strategy::Memoization);
    assert_eq!(rec.answer(), 110);
    assert_eq!(memo.answer(), 110);
    assert!(memo.trace().count(StepKind::CacheHit) > 0);
    assert!(memo.trace().len() < rec.trace().len());
}
