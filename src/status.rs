//! Per-node and per-cell visual status as a pure function of `(trace, cursor)`.
//!
//! Nothing here is stored by the player; statuses are recomputed by scanning
//! the trace whenever the cursor moves.

use serde::Serialize;

use crate::graph::{CallGraph, NodeId};
use crate::trace::{StepKind, StepRecord, Trace};

/// Visual status of a call node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// No record of the node is visible yet.
    Pending,
    /// Called, not yet resolved.
    Active,
    /// Resolved by a base case or by combining its children.
    Completed,
    /// Resolved from the memo.
    Memoized,
    /// Final status of a base-case node; never produced by [`node_status`].
    Base,
}

/// Visual status of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Pending,
    /// The latest record for the cell is the one under the cursor.
    Current,
    Reused,
    Computed,
}

/// Status of `node` with steps `0..=cursor` visible.
pub fn node_status(node: NodeId, trace: &Trace, cursor: usize) -> NodeStatus {
    let mut seen = false;
    let mut returned = false;
    for r in trace.visible(cursor).iter().filter(|r| r.node == Some(node)) {
        seen = true;
        match r.kind {
            StepKind::CacheHit => return NodeStatus::Memoized,
            StepKind::BaseCaseReturn | StepKind::ComputeReturn => returned = true,
            _ => {}
        }
    }
    match (seen, returned) {
        (false, _) => NodeStatus::Pending,
        (true, true) => NodeStatus::Completed,
        (true, false) => NodeStatus::Active,
    }
}

/// Status of every node in `graph`, indexed by [`NodeId`].
///
/// One pass over the visible prefix; agrees with [`node_status`] per node.
pub fn node_statuses(graph: &CallGraph, trace: &Trace, cursor: usize) -> Vec<NodeStatus> {
    let mut statuses = vec![NodeStatus::Pending; graph.len()];
    for r in trace.visible(cursor) {
        let Some(NodeId(idx)) = r.node else { continue };
        let Some(slot) = statuses.get_mut(idx) else {
            continue;
        };
        *slot = match (r.kind, *slot) {
            (_, NodeStatus::Memoized) | (StepKind::CacheHit, _) => NodeStatus::Memoized,
            (StepKind::BaseCaseReturn | StepKind::ComputeReturn, _) => NodeStatus::Completed,
            (_, NodeStatus::Pending) => NodeStatus::Active,
            (_, status) => status,
        };
    }
    statuses
}

/// Status of table cell `index` with steps `0..=cursor` visible.
pub fn cell_status(index: usize, trace: &Trace, cursor: usize) -> CellStatus {
    let latest = trace
        .visible(cursor)
        .iter()
        .rev()
        .find(|r| r.subject == Some(index));
    latest.map_or(CellStatus::Pending, |r| cell_from(r, cursor))
}

/// Status of cells `0..len`, from one pass over the visible prefix.
pub fn cell_statuses(len: usize, trace: &Trace, cursor: usize) -> Vec<CellStatus> {
    let mut latest: Vec<Option<&StepRecord>> = vec![None; len];
    for r in trace.visible(cursor) {
        if let Some(i) = r.subject.filter(|&i| i < len) {
            latest[i] = Some(r);
        }
    }
    latest
        .into_iter()
        .map(|r| r.map_or(CellStatus::Pending, |r| cell_from(r, cursor)))
        .collect()
}

fn cell_from(latest: &StepRecord, cursor: usize) -> CellStatus {
    if latest.step == cursor {
        return CellStatus::Current;
    }
    match latest.kind {
        StepKind::CacheHit => CellStatus::Reused,
        StepKind::Init
        | StepKind::Tabulate
        | StepKind::BaseCaseReturn
        | StepKind::ComputeReturn => CellStatus::Computed,
        StepKind::Call => CellStatus::Pending,
    }
}
