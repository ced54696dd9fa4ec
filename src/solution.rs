//! Everything one solve produces.

use serde::Serialize;

use crate::catalog::{ProblemKind, Strategy};
use crate::engine::Memo;
use crate::graph::CallGraph;
use crate::table::DpTable;
use crate::trace::Trace;

/// Call tree for top-down strategies, table for tabulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Tree(CallGraph),
    Table(DpTable),
}

/// Answer, trace and structure of a single solve. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    problem: ProblemKind,
    strategy: Strategy,
    answer: i64,
    trace: Trace,
    structure: Structure,
    memo: Option<Memo>,
}

impl Solution {
    pub fn new(
        problem: ProblemKind,
        strategy: Strategy,
        answer: i64,
        trace: Trace,
        structure: Structure,
        memo: Option<Memo>,
    ) -> Self {
        debug_assert_eq!(
            strategy.builds_call_graph(),
            matches!(structure, Structure::Tree(_)),
            "{strategy} produced the wrong structure"
        );
        Self {
            problem,
            strategy,
            answer,
            trace,
            structure,
            memo,
        }
    }

    pub fn problem(&self) -> ProblemKind {
        self.problem
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Final answer of the solve.
    pub fn answer(&self) -> i64 {
        self.answer
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn graph(&self) -> Option<&CallGraph> {
        match &self.structure {
            Structure::Tree(g) => Some(g),
            Structure::Table(_) => None,
        }
    }

    pub fn table(&self) -> Option<&DpTable> {
        match &self.structure {
            Structure::Table(t) => Some(t),
            Structure::Tree(_) => None,
        }
    }

    /// Cache left behind by a memoized solve.
    pub fn memo(&self) -> Option<&Memo> {
        self.memo.as_ref()
    }

    /// Answer recovered from the structure alone: the root node's result or
    /// the table's answer cell. `None` when no call was made.
    pub fn structural_answer(&self) -> Option<i64> {
        match &self.structure {
            Structure::Tree(g) => g.root().and_then(|n| n.result),
            Structure::Table(t) => t.answer_index().and_then(|i| t.get(i)),
        }
    }

    /// Number of cells a table view of this solve has: the DP table for
    /// tabulation, one cell per argument for memoization, none otherwise.
    pub fn table_len(&self) -> usize {
        match (&self.structure, self.strategy) {
            (Structure::Table(t), _) => t.len(),
            (Structure::Tree(g), Strategy::Memoization) => {
                g.nodes.iter().map(|n| n.argument + 1).max().unwrap_or(0)
            }
            (Structure::Tree(_), _) => 0,
        }
    }

    /// Serialize for a presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
