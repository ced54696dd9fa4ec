//! Frog Jump with up to `k` steps per jump as a traced DP.
//!
//! `minEnergy(0) = 0`; for `i > 0`,
//! `minEnergy(i) = min_{j in [max(0, i-k), i-1]} minEnergy(j) + |h[i] - h[j]|`.
//!
//! Candidates are scanned in ascending `j` and only a strictly smaller total
//! replaces the current best, so the earliest predecessor wins ties. Path
//! reconstruction relies on that choice.

use crate::catalog::{ProblemKind, Strategy};
use crate::graph::Choice;
use crate::solution::{Solution, Structure};
use crate::table::DpTable;
use crate::trace::{StepKind, TraceRecorder};
use crate::traits::{BaseCase, Combined, Recurrence, TracedProblem};

const START_DESCRIPTION: &str = "Base case: No energy needed to stay at starting position";

/// Frog Jump instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrogJump {
    pub heights: Vec<i64>,
    /// Maximum jump distance.
    pub k: usize,
}

impl FrogJump {
    /// # Panics
    /// Panics if `heights` is empty or `k == 0`.
    pub fn new(heights: Vec<i64>, k: usize) -> Self {
        assert!(!heights.is_empty(), "need at least one step");
        assert!(k > 0, "jump distance must be positive");
        Self { heights, k }
    }

    fn n(&self) -> usize {
        self.heights.len()
    }

    fn window(&self, i: usize) -> std::ops::Range<usize> {
        i.saturating_sub(self.k)..i
    }

    #[inline]
    fn jump_cost(&self, from: usize, to: usize) -> i64 {
        (self.heights[to] - self.heights[from]).abs()
    }

    /// Pick the cheapest `(j, energy_j)` candidate for step `i`.
    fn best_of(&self, i: usize, candidates: impl Iterator<Item = (usize, i64)>) -> (i64, usize) {
        let mut best: Option<(i64, usize)> = None;
        for (j, energy) in candidates {
            let total = energy + self.jump_cost(j, i);
            if best.map_or(true, |(cost, _)| total < cost) {
                best = Some((total, j));
            }
        }
        match best {
            Some(b) => b,
            None => unreachable!("step {i} has no predecessor"),
        }
    }
}

impl Recurrence for FrogJump {
    const NODE_PREFIX: &'static str = "minEnergy";

    fn root(&self) -> Option<usize> {
        Some(self.n() - 1)
    }

    fn call_action(&self, arg: usize) -> String {
        format!("minEnergy({arg})")
    }

    fn call_description(&self, arg: usize) -> String {
        format!(
            "Calculate minimum energy to reach step {arg} (height: {})",
            self.heights[arg]
        )
    }

    fn base_case(&self, arg: usize) -> Option<BaseCase> {
        (arg == 0).then(|| BaseCase {
            value: 0,
            description: START_DESCRIPTION.to_string(),
            choice: None,
        })
    }

    fn children(&self, arg: usize) -> Vec<usize> {
        self.window(arg).collect()
    }

    fn combine(&self, arg: usize, resolved: &[(usize, i64)]) -> Combined {
        let (value, best) = self.best_of(arg, resolved.iter().copied());
        Combined {
            value,
            description: format!(
                "At step {arg}: minimum energy = {value} (best jump from step {best})"
            ),
            choice: Some(Choice::From(best)),
        }
    }

    fn cache_hit_description(&self, arg: usize, value: i64) -> String {
        format!("Cache hit: minEnergy({arg}) = {value}")
    }
}

impl TracedProblem for FrogJump {
    fn kind(&self) -> ProblemKind {
        ProblemKind::FrogJump
    }

    fn solve_tabulated(&self) -> Solution {
        let n = self.n();
        let mut rec = TraceRecorder::new();
        let mut dp = DpTable::new(n, Some(n - 1));

        rec.record(
            StepKind::Init,
            None,
            None,
            "Initialize DP table",
            format!("Initialize dp array with {n} cells, all set to Infinity"),
        );
        dp.set(0, 0, None);
        rec.record(StepKind::Init, Some(0), None, "dp[0] = 0", START_DESCRIPTION);

        for i in 1..n {
            let window = self.window(i);
            let lo = window.start;
            let (value, best) = self.best_of(i, window.map(|j| (j, dp.filled(j))));
            let choice = Choice::From(best);
            dp.set(i, value, Some(choice));
            rec.record_choice(
                StepKind::Tabulate,
                Some(i),
                Some(choice),
                format!(
                    "dp[{i}] = min over j ∈ [{lo}, {}] of (dp[j] + abs({} - {}))",
                    i - 1,
                    self.heights[i],
                    self.heights[best]
                ),
                format!("Step {i}: minimum energy = {value} (best jump from step {best})"),
            );
        }

        Solution::new(
            ProblemKind::FrogJump,
            Strategy::Tabulation,
            dp.answer(),
            rec.finish(),
            Structure::Table(dp),
            None,
        )
    }
}

/// Steps visited on a cheapest route, from 0 to the last step, read off the
/// predecessors recorded by a tabulated solve.
pub fn best_path(table: &DpTable) -> Vec<usize> {
    let Some(mut i) = table.len().checked_sub(1) else {
        return Vec::new();
    };
    let mut path = vec![i];
    while i > 0 {
        match table.choice(i) {
            Some(Choice::From(j)) if j < i => {
                path.push(j);
                i = j;
            }
            _ => break,
        }
    }
    path.reverse();
    path
}
