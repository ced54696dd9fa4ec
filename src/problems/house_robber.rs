//! House Robber as a traced DP.
//!
//! `rob(i)` is the best haul from houses `i..n` without robbing two adjacent
//! houses:
//! - `rob(n-1) = h[n-1]`,
//! - `rob(i) = max(h[i] + rob(i+2), rob(i+1))`, with `rob(i+2) = 0` past the end.
//!
//! Calls visit `i+2` before `i+1`. Calls past the last house resolve to 0
//! without creating a node. The table is filled right to left.

use crate::catalog::{ProblemKind, Strategy};
use crate::graph::Choice;
use crate::solution::{Solution, Structure};
use crate::table::DpTable;
use crate::trace::{StepKind, TraceRecorder};
use crate::traits::{BaseCase, Combined, Recurrence, TracedProblem};

/// House Robber instance over non-negative house values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseRobber {
    pub houses: Vec<i64>,
}

impl HouseRobber {
    pub fn new(houses: Vec<i64>) -> Self {
        debug_assert!(houses.iter().all(|&h| h >= 0), "house values must be non-negative");
        Self { houses }
    }

    fn n(&self) -> usize {
        self.houses.len()
    }

    fn decide(rob_current: i64, skip_current: i64) -> Choice {
        if rob_current > skip_current {
            Choice::Rob
        } else {
            Choice::Skip
        }
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Recurrence for HouseRobber {
    const NODE_PREFIX: &'static str = "rob";

    fn root(&self) -> Option<usize> {
        (!self.houses.is_empty()).then_some(0)
    }

    fn call_action(&self, arg: usize) -> String {
        format!("rob({arg})")
    }

    fn call_description(&self, arg: usize) -> String {
        format!(
            "Consider houses starting at index {arg}: [{}]",
            join_values(&self.houses[arg..])
        )
    }

    fn base_case(&self, arg: usize) -> Option<BaseCase> {
        (arg + 1 == self.n()).then(|| BaseCase {
            value: self.houses[arg],
            description: format!(
                "Base case: Last house {arg} with value {} (no adjacent houses)",
                self.houses[arg]
            ),
            choice: Some(Choice::Rob),
        })
    }

    fn children(&self, arg: usize) -> Vec<usize> {
        if arg + 2 < self.n() {
            vec![arg + 2, arg + 1]
        } else {
            vec![arg + 1]
        }
    }

    fn combine(&self, arg: usize, resolved: &[(usize, i64)]) -> Combined {
        let value_of = |child: usize| {
            resolved
                .iter()
                .find(|&&(c, _)| c == child)
                .map_or(0, |&(_, v)| v)
        };
        let house = self.houses[arg];
        let rob_current = house + value_of(arg + 2);
        let skip_current = value_of(arg + 1);
        let value = rob_current.max(skip_current);
        Combined {
            value,
            description: format!(
                "At index {arg}: rob({house} + {}) vs skip({skip_current}) = max({rob_current}, {skip_current}) = {value}",
                rob_current - house
            ),
            choice: Some(Self::decide(rob_current, skip_current)),
        }
    }

    fn cache_hit_description(&self, arg: usize, value: i64) -> String {
        format!("Cache hit: rob({arg}) = {value}")
    }
}

impl TracedProblem for HouseRobber {
    fn kind(&self) -> ProblemKind {
        ProblemKind::HouseRobber
    }

    fn solve_tabulated(&self) -> Solution {
        let n = self.n();
        let h = &self.houses;
        let mut rec = TraceRecorder::new();
        let mut dp = DpTable::new(n, (n > 0).then_some(0));

        rec.record(
            StepKind::Init,
            None,
            None,
            "Initialize DP table",
            format!("Initialize dp array with {n} cells, all set to 0"),
        );

        if n > 0 {
            let last = n - 1;
            dp.set(last, h[last], Some(Choice::Rob));
            rec.record_choice(
                StepKind::Init,
                Some(last),
                Some(Choice::Rob),
                format!("dp[{last}] = {}", h[last]),
                format!(
                    "Base case: Last house {last} with value {} (no adjacent houses)",
                    h[last]
                ),
            );
        }

        for i in (0..n.saturating_sub(1)).rev() {
            let after_next = if i + 2 < n { dp.filled(i + 2) } else { 0 };
            let rob_current = h[i] + after_next;
            let skip_current = dp.filled(i + 1);
            let value = rob_current.max(skip_current);
            let choice = Self::decide(rob_current, skip_current);
            dp.set(i, value, Some(choice));

            let after_next_ref = if i + 2 < n {
                format!("dp[{}]", i + 2)
            } else {
                "0".to_string()
            };
            rec.record_choice(
                StepKind::Tabulate,
                Some(i),
                Some(choice),
                format!("dp[{i}] = max({} + {after_next_ref}, dp[{}])", h[i], i + 1),
                format!(
                    "House {i}: rob({} + {after_next}) vs skip({skip_current}) = max({rob_current}, {skip_current}) = {value}",
                    h[i]
                ),
            );
        }

        Solution::new(
            ProblemKind::HouseRobber,
            Strategy::Tabulation,
            dp.answer(),
            rec.finish(),
            Structure::Table(dp),
            None,
        )
    }
}

/// Indices of the robbed houses, read off a tabulated solve by following the
/// rob/skip decisions from house 0.
pub fn robbed_houses(table: &DpTable) -> Vec<usize> {
    let mut robbed = Vec::new();
    let mut i = 0;
    while i < table.len() {
        match table.choice(i) {
            Some(Choice::Rob) => {
                robbed.push(i);
                i += 2;
            }
            _ => i += 1,
        }
    }
    robbed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::NodeStatus;

    #[test]
    fn classic_example_all_strategies() {
        let p = HouseRobber::new(vec![2, 7, 9, 3, 1]);
        for s in Strategy::ALL {
            assert_eq!(p.solve(s).answer(), 12, "via {s}");
        }
    }

    #[test]
    fn empty_and_single() {
        let empty = HouseRobber::new(vec![]);
        let rec = empty.solve_recursive();
        assert_eq!(rec.answer(), 0);
        assert!(rec.trace().is_empty());
        assert_eq!(rec.structural_answer(), None);

        let tab = empty.solve_tabulated();
        assert_eq!(tab.answer(), 0);
        assert_eq!(tab.trace().len(), 1);

        let single = HouseRobber::new(vec![6]);
        for s in Strategy::ALL {
            assert_eq!(single.solve(s).answer(), 6);
        }
        let rec = single.solve_recursive();
        assert_eq!(rec.trace().len(), 2);
        assert_eq!(
            rec.graph().and_then(|g| g.root()).map(|n| n.final_status()),
            Some(NodeStatus::Base)
        );
    }

    #[test]
    fn calls_visit_two_ahead_first() {
        let sol = HouseRobber::new(vec![1, 2, 3]).solve_recursive();
        let calls: Vec<_> = sol
            .trace()
            .iter()
            .filter(|r| r.kind == StepKind::Call)
            .map(|r| r.action.as_str())
            .collect();
        assert_eq!(calls, vec!["rob(0)", "rob(2)", "rob(1)", "rob(2)"]);
    }

    #[test]
    fn tabulation_runs_right_to_left() {
        let sol = HouseRobber::new(vec![2, 7, 9, 3, 1]).solve_tabulated();
        let subjects: Vec<_> = sol.trace().iter().map(|r| r.subject).collect();
        assert_eq!(
            subjects,
            vec![None, Some(4), Some(3), Some(2), Some(1), Some(0)]
        );
        let table = sol.table().expect("table");
        assert_eq!(
            table.cells(),
            &[Some(12), Some(10), Some(10), Some(3), Some(1)]
        );
        assert_eq!(robbed_houses(table), vec![0, 2, 4]);
        assert_eq!(
            sol.trace().records()[2].action,
            "dp[3] = max(3 + 0, dp[4])"
        );
    }

    #[test]
    fn ties_skip() {
        let sol = HouseRobber::new(vec![5, 5]).solve_tabulated();
        let table = sol.table().expect("table");
        assert_eq!(table.choice(0), Some(Choice::Skip));
        assert_eq!(robbed_houses(table), vec![1]);
    }
}
