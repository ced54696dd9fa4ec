//! Generic top-down driver for recursive and memoized solves.
//!
//! [`TopDown`] walks a [`Recurrence`] depth-first. Every invocation opens a
//! call node and emits a `Call` record, then resolves through (in order):
//! 1. the memo, when one is supplied (`CacheHit`, no children),
//! 2. the base case (`BaseCaseReturn`),
//! 3. its children, combined by the recurrence (`ComputeReturn`).
//!
//! The memo is an explicit value: it is moved into [`TopDown::memoized`],
//! threaded through the recursion as `Option<&mut Memo>`, and handed back to
//! the caller together with the expansion.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::{CallGraph, NodeId, Resolution};
use crate::trace::{StepKind, Trace, TraceRecorder};
use crate::traits::Recurrence;

/// Per-solve cache of resolved arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Memo {
    entries: BTreeMap<usize, i64>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, arg: usize) -> Option<i64> {
        self.entries.get(&arg).copied()
    }

    #[inline]
    pub fn contains(&self, arg: usize) -> bool {
        self.entries.contains_key(&arg)
    }

    pub fn insert(&mut self, arg: usize, value: i64) {
        self.entries.insert(arg, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached `(argument, value)` pairs in ascending argument order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }
}

/// Output of a top-down solve.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub answer: i64,
    pub trace: Trace,
    pub graph: CallGraph,
}

/// Depth-first driver over a [`Recurrence`].
pub struct TopDown<'p, R: Recurrence + ?Sized> {
    problem: &'p R,
    graph: CallGraph,
    recorder: TraceRecorder,
}

impl<'p, R: Recurrence + ?Sized> TopDown<'p, R> {
    fn new(problem: &'p R) -> Self {
        Self {
            problem,
            graph: CallGraph::new(),
            recorder: TraceRecorder::new(),
        }
    }

    /// Expand the full call tree without caching.
    pub fn recursive(problem: &'p R) -> Expansion {
        let mut run = Self::new(problem);
        let answer = run.start(None);
        run.finish(answer)
    }

    /// Expand with `memo` consulted before every base case and recursion.
    ///
    /// Returns the expansion and the memo as it stands after the solve.
    pub fn memoized(problem: &'p R, mut memo: Memo) -> (Expansion, Memo) {
        let mut run = Self::new(problem);
        let answer = run.start(Some(&mut memo));
        (run.finish(answer), memo)
    }

    fn start(&mut self, memo: Option<&mut Memo>) -> i64 {
        match self.problem.root() {
            Some(root) => self.call(root, None, memo),
            None => self.problem.empty_answer(),
        }
    }

    fn finish(self, answer: i64) -> Expansion {
        Expansion {
            answer,
            trace: self.recorder.finish(),
            graph: self.graph,
        }
    }

    fn call(&mut self, arg: usize, parent: Option<NodeId>, mut memo: Option<&mut Memo>) -> i64 {
        let problem = self.problem;
        let label = format!("{}{}_{}", R::NODE_PREFIX, arg, self.graph.len());
        let id = self.graph.open(label, arg, parent);
        self.recorder.record(
            StepKind::Call,
            Some(arg),
            Some(id),
            problem.call_action(arg),
            problem.call_description(arg),
        );

        if let Some(cached) = memo.as_deref().and_then(|m| m.get(arg)) {
            self.graph.resolve(id, cached, Resolution::Memoized, None);
            self.recorder.record(
                StepKind::CacheHit,
                Some(arg),
                Some(id),
                format!("return {cached} (cached)"),
                problem.cache_hit_description(arg, cached),
            );
            return cached;
        }

        if let Some(base) = problem.base_case(arg) {
            if let Some(m) = memo {
                m.insert(arg, base.value);
            }
            self.graph
                .resolve(id, base.value, Resolution::Base, base.choice);
            self.recorder.record(
                StepKind::BaseCaseReturn,
                Some(arg),
                Some(id),
                format!("return {}", base.value),
                base.description,
            );
            return base.value;
        }

        let children = problem.children(arg);
        let mut resolved = Vec::with_capacity(children.len());
        for child in children {
            let value = self.call(child, Some(id), memo.as_deref_mut());
            resolved.push((child, value));
        }

        let combined = problem.combine(arg, &resolved);
        if let Some(m) = memo {
            m.insert(arg, combined.value);
        }
        self.graph
            .resolve(id, combined.value, Resolution::Computed, combined.choice);
        self.recorder.record(
            StepKind::ComputeReturn,
            Some(arg),
            Some(id),
            format!("return {}", combined.value),
            combined.description,
        );
        combined.value
    }
}
