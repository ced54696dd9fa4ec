//! Core trait definitions for traced dynamic programs.
//!
//! To make a recurrence replayable, implement [`Recurrence`] for a struct that
//! captures the instance (the Fibonacci argument, the house values, the step
//! heights) and [`TracedProblem`] for its bottom-up table.
//!
//! The split mirrors the three strategies:
//! - Recursive and memoized solves are driven generically by
//!   [`TopDown`](crate::engine::TopDown), which only needs to know the root
//!   argument, the base cases, the children of an argument and how child
//!   values combine.
//! - Tabulation is problem-specific (fill order and seed cells differ), so each
//!   problem writes it directly against a [`TraceRecorder`](crate::trace::TraceRecorder).
//!
//! Implementations must be deterministic: solving the same instance twice
//! yields identical traces.

use crate::catalog::{ProblemKind, Strategy};
use crate::engine::{Memo, TopDown};
use crate::graph::Choice;
use crate::solution::{Solution, Structure};

/// Value produced by a base case.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCase {
    pub value: i64,
    pub description: String,
    pub choice: Option<Choice>,
}

/// Value produced by combining resolved children.
#[derive(Debug, Clone, PartialEq)]
pub struct Combined {
    pub value: i64,
    pub description: String,
    pub choice: Option<Choice>,
}

/// A top-down recurrence over `usize` arguments.
pub trait Recurrence {
    /// Prefix of call-node labels; a node is labelled
    /// `{NODE_PREFIX}{argument}_{invocation}`.
    const NODE_PREFIX: &'static str;

    /// Argument of the outermost call, or `None` when the instance is empty
    /// and no call is made at all.
    fn root(&self) -> Option<usize>;

    /// Answer of an instance whose [`root`](Self::root) is `None`.
    fn empty_answer(&self) -> i64 {
        0
    }

    /// Code-like text of a call record, e.g. `fibonacci(4)`.
    fn call_action(&self, arg: usize) -> String;

    /// Human-readable text of a call record.
    fn call_description(&self, arg: usize) -> String;

    /// Resolve `arg` without recursing, if it is a base case.
    fn base_case(&self, arg: usize) -> Option<BaseCase>;

    /// Arguments `arg` recurses into, in call order.
    ///
    /// Only arguments that get their own invocation are listed; contributions
    /// that resolve without a call (House Robber past the last house) are
    /// folded into [`combine`](Self::combine).
    fn children(&self, arg: usize) -> Vec<usize>;

    /// Combine `(child, value)` pairs, in the order of
    /// [`children`](Self::children), into the value of `arg`.
    fn combine(&self, arg: usize, resolved: &[(usize, i64)]) -> Combined;

    /// Description of a cache hit for `arg`.
    fn cache_hit_description(&self, arg: usize, value: i64) -> String;
}

/// A problem that can be solved and traced under every [`Strategy`].
pub trait TracedProblem: Recurrence {
    fn kind(&self) -> ProblemKind;

    /// Bottom-up solve; records `Init` and `Tabulate` steps only.
    fn solve_tabulated(&self) -> Solution;

    /// Plain recursion, no caching.
    fn solve_recursive(&self) -> Solution {
        let expansion = TopDown::recursive(self);
        Solution::new(
            self.kind(),
            Strategy::Recursive,
            expansion.answer,
            expansion.trace,
            Structure::Tree(expansion.graph),
            None,
        )
    }

    /// Recursion with a cache scoped to this solve.
    fn solve_memoized(&self) -> Solution {
        let (expansion, memo) = TopDown::memoized(self, Memo::new());
        Solution::new(
            self.kind(),
            Strategy::Memoization,
            expansion.answer,
            expansion.trace,
            Structure::Tree(expansion.graph),
            Some(memo),
        )
    }

    /// Dispatch on `strategy`.
    fn solve(&self, strategy: Strategy) -> Solution {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve", problem = %self.kind(), %strategy);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let solution = match strategy {
            Strategy::Recursive => self.solve_recursive(),
            Strategy::Memoization => self.solve_memoized(),
            Strategy::Tabulation => self.solve_tabulated(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            answer = solution.answer(),
            steps = solution.trace().len(),
            "solve finished"
        );
        solution
    }
}
