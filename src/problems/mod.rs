//! The three traced problem families.
//!
//! Each module implements [`Recurrence`](crate::traits::Recurrence) and
//! [`TracedProblem`](crate::traits::TracedProblem):
//! - [`fibonacci`]    : `F(n) = F(n-1) + F(n-2)`.
//! - [`house_robber`] : best non-adjacent haul, filled right to left.
//! - [`frog_jump`]    : cheapest climb with jumps of up to `k` steps.

pub mod fibonacci;
pub mod frog_jump;
pub mod house_robber;

use crate::catalog::{ProblemKind, Strategy};
use crate::solution::Solution;
use crate::traits::TracedProblem;

pub use fibonacci::Fibonacci;
pub use frog_jump::FrogJump;
pub use house_robber::HouseRobber;

/// Any one of the supported problem instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Fibonacci(Fibonacci),
    HouseRobber(HouseRobber),
    FrogJump(FrogJump),
}

impl Problem {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Problem::Fibonacci(p) => p.kind(),
            Problem::HouseRobber(p) => p.kind(),
            Problem::FrogJump(p) => p.kind(),
        }
    }

    /// Solve and trace under `strategy`.
    pub fn solve(&self, strategy: Strategy) -> Solution {
        match self {
            Problem::Fibonacci(p) => p.solve(strategy),
            Problem::HouseRobber(p) => p.solve(strategy),
            Problem::FrogJump(p) => p.solve(strategy),
        }
    }
}

impl From<Fibonacci> for Problem {
    fn from(p: Fibonacci) -> Self {
        Problem::Fibonacci(p)
    }
}

impl From<HouseRobber> for Problem {
    fn from(p: HouseRobber) -> Self {
        Problem::HouseRobber(p)
    }
}

impl From<FrogJump> for Problem {
    fn from(p: FrogJump) -> Self {
        Problem::FrogJump(p)
    }
}
