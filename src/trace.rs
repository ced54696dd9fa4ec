//! Step records and the append-only trace a solve produces.
//!
//! A [`Trace`] is built once by a [`TraceRecorder`] while a solver runs and is
//! frozen afterwards. Every record's `step` equals its position in the trace,
//! so the trace is dense, gapless and zero-based by construction.

use serde::Serialize;

use crate::graph::{Choice, NodeId};

/// Synthetic spacing between consecutive step timestamps, in milliseconds.
pub const STEP_SPACING_MS: u64 = 100;

/// What happened at one step of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// A recursive invocation started.
    Call,
    /// An invocation resolved through a base case.
    BaseCaseReturn,
    /// A memoized invocation found its argument in the cache.
    CacheHit,
    /// An invocation combined its children's values and returned.
    ComputeReturn,
    /// A table was allocated or a seed cell was written.
    Init,
    /// A table cell was computed from earlier cells.
    Tabulate,
}

impl StepKind {
    /// Returns true for the records that give a call node its final value.
    #[inline]
    pub fn resolves_call(self) -> bool {
        matches!(
            self,
            StepKind::BaseCaseReturn | StepKind::ComputeReturn | StepKind::CacheHit
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Call => "call",
            StepKind::BaseCaseReturn => "base_case_return",
            StepKind::CacheHit => "cache_hit",
            StepKind::ComputeReturn => "compute_return",
            StepKind::Init => "init",
            StepKind::Tabulate => "tabulate",
        }
    }
}

/// One atomic event recorded during a solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Position in the trace; the sole ordering key.
    pub step: usize,
    pub kind: StepKind,
    /// Argument or table index this event concerns. `None` for whole-table
    /// initialization.
    pub subject: Option<usize>,
    /// Call node the event belongs to (recursive and memoized strategies).
    pub node: Option<NodeId>,
    /// Short code-like text, e.g. `fibonacci(5)` or `dp[3] = dp[2] + dp[1]`.
    pub action: String,
    /// Human-readable derivation.
    pub description: String,
    /// Decision taken by a tabulated cell, if the problem records one.
    pub choice: Option<Choice>,
}

impl StepRecord {
    /// Cosmetic timestamp offset in milliseconds: `(step + 1) * 100`.
    #[inline]
    pub fn timestamp_ms(&self) -> u64 {
        (self.step as u64 + 1) * STEP_SPACING_MS
    }

    /// Timestamp rendered as `mm:ss.mmm`.
    pub fn timestamp_label(&self) -> String {
        let ms = self.timestamp_ms();
        format!(
            "{:02}:{:02}.{:03}",
            ms / 60_000,
            (ms / 1_000) % 60,
            ms % 1_000
        )
    }
}

/// Immutable, totally ordered list of step records from one solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    records: Vec<StepRecord>,
}

impl Trace {
    /// Number of records in the trace.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, step: usize) -> Option<&StepRecord> {
        self.records.get(step)
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    /// Records visible at `cursor`, i.e. steps `0..=cursor`.
    ///
    /// Empty for an empty trace; clamps a cursor past the end.
    pub fn visible(&self, cursor: usize) -> &[StepRecord] {
        if self.records.is_empty() {
            return &[];
        }
        let end = cursor.min(self.records.len() - 1) + 1;
        &self.records[..end]
    }

    /// All records that belong to `node`, in step order.
    pub fn for_node(&self, node: NodeId) -> impl Iterator<Item = &StepRecord> + '_ {
        self.records.iter().filter(move |r| r.node == Some(node))
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: StepKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Append-only builder for a [`Trace`].
///
/// The recorder assigns `step` itself, which is what keeps traces dense.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    records: Vec<StepRecord>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step number the next record will receive.
    #[inline]
    pub fn next_step(&self) -> usize {
        self.records.len()
    }

    /// Append a record and return its step number.
    pub fn record(
        &mut self,
        kind: StepKind,
        subject: Option<usize>,
        node: Option<NodeId>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        self.push(kind, subject, node, action.into(), description.into(), None)
    }

    /// Append a tabulation record carrying the decision taken for the cell.
    pub fn record_choice(
        &mut self,
        kind: StepKind,
        subject: Option<usize>,
        choice: Option<Choice>,
        action: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        self.push(kind, subject, None, action.into(), description.into(), choice)
    }

    fn push(
        &mut self,
        kind: StepKind,
        subject: Option<usize>,
        node: Option<NodeId>,
        action: String,
        description: String,
        choice: Option<Choice>,
    ) -> usize {
        let step = self.next_step();
        self.records.push(StepRecord {
            step,
            kind,
            subject,
            node,
            action,
            description,
            choice,
        });
        step
    }

    /// Freeze the recorded steps.
    pub fn finish(self) -> Trace {
        Trace {
            records: self.records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        let mut rec = TraceRecorder::new();
        rec.record(StepKind::Call, Some(2), Some(NodeId(0)), "f(2)", "Call f(2)");
        rec.record(StepKind::Call, Some(1), Some(NodeId(1)), "f(1)", "Call f(1)");
        rec.record(
            StepKind::BaseCaseReturn,
            Some(1),
            Some(NodeId(1)),
            "return 1",
            "Base case",
        );
        rec.finish()
    }

    #[test]
    fn recorder_reports_next_step() {
        let mut rec = TraceRecorder::new();
        assert_eq!(rec.next_step(), 0);
        let step = rec.record(StepKind::Init, Some(0), None, "dp[0] = 0", "Init");
        assert_eq!(step, 0);
        assert_eq!(rec.next_step(), 1);
    }

    #[test]
    fn recorder_assigns_dense_steps() {
        let trace = sample();
        for (i, r) in trace.iter().enumerate() {
            assert_eq!(r.step, i);
        }
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn visible_prefix_clamps() {
        let trace = sample();
        assert_eq!(trace.visible(0).len(), 1);
        assert_eq!(trace.visible(1).len(), 2);
        assert_eq!(trace.visible(99).len(), 3);
        assert!(Trace::default().visible(0).is_empty());
    }

    #[test]
    fn timestamps_are_synthetic_offsets() {
        let trace = sample();
        assert_eq!(trace.records()[0].timestamp_ms(), 100);
        assert_eq!(trace.records()[2].timestamp_label(), "00:00.300");

        let mut rec = TraceRecorder::new();
        for _ in 0..650 {
            rec.record(StepKind::Init, None, None, "", "");
        }
        let long = rec.finish();
        assert_eq!(long.records()[599].timestamp_label(), "01:00.000");
        assert_eq!(long.records()[649].timestamp_label(), "01:05.000");
    }

    #[test]
    fn node_filter_and_counts() {
        let trace = sample();
        assert_eq!(trace.for_node(NodeId(1)).count(), 2);
        assert_eq!(trace.count(StepKind::Call), 2);
        assert_eq!(trace.count(StepKind::CacheHit), 0);
    }
}
