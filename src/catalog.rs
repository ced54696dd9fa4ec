//! Problem and strategy identifiers and their descriptive metadata.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// An identifier that names no known problem or strategy.
///
/// This is a wiring defect, not a user mistake; callers are expected to
/// surface it loudly rather than fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    #[error("unknown strategy '{0}' (expected recursive, memoization or tabulation)")]
    UnknownStrategy(String),
    #[error("unknown problem '{0}' (expected fibonacci, house-robber or frog-jump)")]
    UnknownProblem(String),
}

/// How a problem is solved and traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain recursion, no caching.
    Recursive,
    /// Top-down recursion with a per-solve cache.
    Memoization,
    /// Bottom-up table filling, no call graph.
    Tabulation,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Recursive,
        Strategy::Memoization,
        Strategy::Tabulation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoization => "memoization",
            Strategy::Tabulation => "tabulation",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "Recursive Approach",
            Strategy::Memoization => "Memoization (Top-Down)",
            Strategy::Tabulation => "Tabulation (Bottom-Up)",
        }
    }

    /// Whether solving with this strategy records a call graph.
    #[inline]
    pub fn builds_call_graph(self) -> bool {
        !matches!(self, Strategy::Tabulation)
    }

    /// Asymptotic cost of this strategy on `problem`.
    pub fn complexity(self, problem: ProblemKind) -> Complexity {
        const STACK_AND_TABLE: &str = "O(n) (recursive stack) + O(n) (DP array)";
        match (problem, self) {
            (ProblemKind::FrogJump, Strategy::Recursive) => Complexity::new("O(k^n)", "O(n)"),
            (ProblemKind::FrogJump, Strategy::Memoization) => {
                Complexity::new("O(n×k)", STACK_AND_TABLE)
            }
            (ProblemKind::FrogJump, Strategy::Tabulation) => Complexity::new("O(n×k)", "O(n)"),
            (_, Strategy::Recursive) => Complexity::new("O(2^n)", "O(n)"),
            (_, Strategy::Memoization) => Complexity::new("O(n)", STACK_AND_TABLE),
            (_, Strategy::Tabulation) => Complexity::new("O(n)", "O(n)"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Strategy {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Strategy::Recursive),
            "memoization" => Ok(Strategy::Memoization),
            "tabulation" => Ok(Strategy::Tabulation),
            other => Err(ParseIdError::UnknownStrategy(other.to_string())),
        }
    }
}

/// The three problem families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemKind {
    Fibonacci,
    HouseRobber,
    FrogJump,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 3] = [
        ProblemKind::Fibonacci,
        ProblemKind::HouseRobber,
        ProblemKind::FrogJump,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ProblemKind::Fibonacci => "fibonacci",
            ProblemKind::HouseRobber => "house-robber",
            ProblemKind::FrogJump => "frog-jump",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ProblemKind::Fibonacci => "Fibonacci Sequence",
            ProblemKind::HouseRobber => "House Robber",
            ProblemKind::FrogJump => "Frog Jump",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProblemKind {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fibonacci" => Ok(ProblemKind::Fibonacci),
            "house-robber" => Ok(ProblemKind::HouseRobber),
            "frog-jump" => Ok(ProblemKind::FrogJump),
            other => Err(ParseIdError::UnknownProblem(other.to_string())),
        }
    }
}

/// Time and space descriptors shown next to a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

impl Complexity {
    const fn new(time: &'static str, space: &'static str) -> Self {
        Self { time, space }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.id().parse::<Strategy>(), Ok(s));
        }
        for p in ProblemKind::ALL {
            assert_eq!(p.to_string().parse::<ProblemKind>(), Ok(p));
        }
    }

    #[test]
    fn unknown_ids_are_errors() {
        assert_eq!(
            "greedy".parse::<Strategy>(),
            Err(ParseIdError::UnknownStrategy("greedy".into()))
        );
        assert!("Recursive".parse::<Strategy>().is_err());
        assert!("knapsack".parse::<ProblemKind>().is_err());
    }

    #[test]
    fn frog_jump_complexity_mentions_k() {
        let c = Strategy::Memoization.complexity(ProblemKind::FrogJump);
        assert_eq!(c.time, "O(n×k)");
        let c = Strategy::Recursive.complexity(ProblemKind::Fibonacci);
        assert_eq!(c.time, "O(2^n)");
    }
}
