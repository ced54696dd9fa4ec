//! Cross-checking the three strategies against each other.
//!
//! With the `parallel` feature the recursive solve (the expensive one) runs
//! alongside the other two via `rayon::join`.

use crate::catalog::Strategy;
use crate::problems::Problem;

/// Answers of every strategy on one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossCheck {
    pub recursive: i64,
    pub memoized: i64,
    pub tabulated: i64,
}

impl CrossCheck {
    /// True when all strategies produced the same answer.
    pub fn agrees(&self) -> bool {
        self.recursive == self.memoized && self.memoized == self.tabulated
    }

    /// The shared answer, if the strategies agree.
    pub fn answer(&self) -> Option<i64> {
        self.agrees().then_some(self.recursive)
    }

    pub fn get(&self, strategy: Strategy) -> i64 {
        match strategy {
            Strategy::Recursive => self.recursive,
            Strategy::Memoization => self.memoized,
            Strategy::Tabulation => self.tabulated,
        }
    }
}

#[cfg(feature = "parallel")]
pub fn cross_check(problem: &Problem) -> CrossCheck {
    let solve = |s: Strategy| problem.solve(s).answer();
    let (recursive, (memoized, tabulated)) = rayon::join(
        || solve(Strategy::Recursive),
        || {
            rayon::join(
                || solve(Strategy::Memoization),
                || solve(Strategy::Tabulation),
            )
        },
    );
    CrossCheck {
        recursive,
        memoized,
        tabulated,
    }
}

#[cfg(not(feature = "parallel"))]
pub fn cross_check(problem: &Problem) -> CrossCheck {
    let solve = |s: Strategy| problem.solve(s).answer();
    CrossCheck {
        recursive: solve(Strategy::Recursive),
        memoized: solve(Strategy::Memoization),
        tabulated: solve(Strategy::Tabulation),
    }
}
