//! Bottom-up DP table filled by the tabulation strategy.

use serde::Serialize;

use crate::graph::Choice;

/// Fixed-length table of cells; a cell is `None` until it is written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DpTable {
    cells: Vec<Option<i64>>,
    choices: Vec<Option<Choice>>,
    /// Cell that holds the final answer, `None` for an empty table.
    answer_index: Option<usize>,
}

impl DpTable {
    /// Allocate `len` empty cells; `answer_index` must lie inside the table.
    pub fn new(len: usize, answer_index: Option<usize>) -> Self {
        if let Some(idx) = answer_index {
            assert!(idx < len, "answer cell {idx} outside table of {len}");
        }
        Self {
            cells: vec![None; len],
            choices: vec![None; len],
            answer_index,
        }
    }

    /// Write cell `idx`. Cells are written once, in dependency order.
    pub fn set(&mut self, idx: usize, value: i64, choice: Option<Choice>) {
        debug_assert!(self.cells[idx].is_none(), "dp[{idx}] written twice");
        self.cells[idx] = Some(value);
        self.choices[idx] = choice;
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<i64> {
        self.cells.get(idx).copied().flatten()
    }

    /// Value of a cell that the recurrence guarantees is already filled.
    #[inline]
    pub(crate) fn filled(&self, idx: usize) -> i64 {
        match self.cells[idx] {
            Some(v) => v,
            None => panic!("dp[{idx}] read before it was written"),
        }
    }

    #[inline]
    pub fn choice(&self, idx: usize) -> Option<Choice> {
        self.choices.get(idx).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<i64>] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn answer_index(&self) -> Option<usize> {
        self.answer_index
    }

    /// Value in the answer cell; 0 for an empty table.
    pub fn answer(&self) -> i64 {
        self.answer_index.and_then(|i| self.get(i)).unwrap_or(0)
    }

    /// Number of cells written so far.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
