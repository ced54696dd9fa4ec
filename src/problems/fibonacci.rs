//! Fibonacci numbers as a traced DP.
//!
//! `F(0) = 0`, `F(1) = 1`, `F(n) = F(n-1) + F(n-2)`. Calls visit `n-1`
//! before `n-2`; the table is filled in ascending order from the two seeds.

use crate::catalog::{ProblemKind, Strategy};
use crate::solution::{Solution, Structure};
use crate::table::DpTable;
use crate::trace::{StepKind, TraceRecorder};
use crate::traits::{BaseCase, Combined, Recurrence, TracedProblem};

/// Fibonacci instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    pub n: usize,
}

impl Fibonacci {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Recurrence for Fibonacci {
    const NODE_PREFIX: &'static str = "f";

    fn root(&self) -> Option<usize> {
        Some(self.n)
    }

    fn call_action(&self, arg: usize) -> String {
        format!("fibonacci({arg})")
    }

    fn call_description(&self, arg: usize) -> String {
        format!("Call fibonacci({arg})")
    }

    fn base_case(&self, arg: usize) -> Option<BaseCase> {
        (arg <= 1).then(|| BaseCase {
            value: arg as i64,
            description: format!("Base case: F({arg}) = {arg}"),
            choice: None,
        })
    }

    fn children(&self, arg: usize) -> Vec<usize> {
        vec![arg - 1, arg - 2]
    }

    fn combine(&self, arg: usize, resolved: &[(usize, i64)]) -> Combined {
        let (left, right) = (resolved[0].1, resolved[1].1);
        let value = left + right;
        Combined {
            value,
            description: format!(
                "F({arg}) = F({}) + F({}) = {left} + {right} = {value}",
                arg - 1,
                arg - 2
            ),
            choice: None,
        }
    }

    fn cache_hit_description(&self, arg: usize, value: i64) -> String {
        format!("Cache hit: F({arg}) = {value}")
    }
}

impl TracedProblem for Fibonacci {
    fn kind(&self) -> ProblemKind {
        ProblemKind::Fibonacci
    }

    fn solve_tabulated(&self) -> Solution {
        let n = self.n;
        let mut rec = TraceRecorder::new();
        let mut dp = DpTable::new(n + 1, Some(n));

        dp.set(0, 0, None);
        rec.record(
            StepKind::Init,
            Some(0),
            None,
            "dp[0] = 0",
            "Initialize base case: F(0) = 0",
        );
        if n >= 1 {
            dp.set(1, 1, None);
            rec.record(
                StepKind::Init,
                Some(1),
                None,
                "dp[1] = 1",
                "Initialize base case: F(1) = 1",
            );
        }

        for i in 2..=n {
            let (a, b) = (dp.filled(i - 1), dp.filled(i - 2));
            let value = a + b;
            dp.set(i, value, None);
            rec.record(
                StepKind::Tabulate,
                Some(i),
                None,
                format!("dp[{i}] = dp[{}] + dp[{}]", i - 1, i - 2),
                format!(
                    "F({i}) = F({}) + F({}) = {a} + {b} = {value}",
                    i - 1,
                    i - 2
                ),
            );
        }

        Solution::new(
            ProblemKind::Fibonacci,
            Strategy::Tabulation,
            dp.answer(),
            rec.finish(),
            Structure::Table(dp),
            None,
        )
    }
}
