//! Traced dynamic programming with step-by-step replay.
//!
//! This crate solves small dynamic programs three ways (plain recursion,
//! top-down memoization, bottom-up tabulation) and records every step of the
//! solve so it can be replayed one step at a time.
//!
//! ## Core idea
//! 1. A solver runs to completion and emits a [`Solution`]: the answer, a
//!    dense, immutable [`Trace`] of step records, and either a call graph
//!    (recursive/memoized) or a DP table (tabulation).
//! 2. A [`Player`] holds a cursor into that trace. Commands move it; an
//!    owned interval timer, fed by the host's elapsed time, auto-advances it.
//! 3. Node and cell statuses are pure functions of `(trace, cursor)`, see
//!    [`status`].
//!
//! ## Quick start
//! ```
//! use dp_replay::{problems::HouseRobber, Player, Strategy, TracedProblem};
//!
//! let solution = HouseRobber::new(vec![2, 7, 9, 3, 1]).solve(Strategy::Memoization);
//! assert_eq!(solution.answer(), 12);
//! assert!(solution.trace().iter().enumerate().all(|(i, r)| r.step == i));
//!
//! let mut player = Player::new();
//! player.load(solution);
//! player.step_forward();
//! assert_eq!(player.cursor(), 1);
//! ```
//!
//! ## Built-in problems
//! - Fibonacci numbers
//! - House Robber (no two adjacent houses)
//! - Frog Jump with jumps of up to `k` steps
//!
//! Implementing [`Recurrence`] and [`TracedProblem`] for another recurrence
//! gives it the same three traced strategies.

pub mod builder;
pub mod catalog;
pub mod controls;
pub mod engine;
pub mod graph;
pub mod input;
pub mod layout;
pub mod playback;
pub mod problems;
pub mod session;
pub mod solution;
pub mod status;
pub mod table;
pub mod trace;
pub mod traits;
pub mod verify;

pub use crate::builder::PlayerBuilder;
pub use crate::catalog::{ProblemKind, Strategy};
pub use crate::playback::{Player, PlayerState, Speed};
pub use crate::session::Session;
pub use crate::solution::Solution;
pub use crate::trace::{StepKind, StepRecord, Trace};
pub use crate::traits::{Recurrence, TracedProblem};
