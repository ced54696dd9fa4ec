//! One visualization session: problem, strategy, input and a player.
//!
//! Every change of problem, strategy or input resets the player first, so a
//! running timer is dropped together with the trace it was stepping through.

use crate::catalog::{ProblemKind, Strategy};
use crate::input::{self, InputError};
use crate::playback::Player;
use crate::problems::Problem;
use crate::solution::Solution;

#[derive(Debug)]
pub struct Session {
    problem: ProblemKind,
    strategy: Strategy,
    input: Option<Problem>,
    player: Player,
}

impl Session {
    pub fn new(problem: ProblemKind, strategy: Strategy) -> Self {
        Self::with_player(problem, strategy, Player::new())
    }

    /// Session around a pre-configured player; the player is reset.
    pub fn with_player(problem: ProblemKind, strategy: Strategy, mut player: Player) -> Self {
        player.reset();
        Self {
            problem,
            strategy,
            input: None,
            player,
        }
    }

    pub fn problem(&self) -> ProblemKind {
        self.problem
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn input(&self) -> Option<&Problem> {
        self.input.as_ref()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Switch problem family; the current input no longer applies.
    pub fn set_problem(&mut self, problem: ProblemKind) {
        self.player.reset();
        if self.problem != problem {
            self.input = None;
        }
        self.problem = problem;
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.player.reset();
        self.strategy = strategy;
    }

    /// Replace the input; also selects the input's problem family.
    pub fn set_input(&mut self, problem: Problem) {
        self.player.reset();
        self.problem = problem.kind();
        self.input = Some(problem);
    }

    /// Parse text for the current problem family and use it as input.
    ///
    /// `jump` is only read for Frog Jump. On error the previous input is kept
    /// but the player is still reset, since the field changed.
    pub fn set_input_text(&mut self, values: &str, jump: Option<&str>) -> Result<(), InputError> {
        self.player.reset();
        let parsed: Problem = match self.problem {
            ProblemKind::Fibonacci => input::parse_fibonacci(values)?.into(),
            ProblemKind::HouseRobber => input::parse_house_robber(values)?.into(),
            ProblemKind::FrogJump => {
                input::parse_frog_jump(values, jump.unwrap_or_default())?.into()
            }
        };
        self.input = Some(parsed);
        Ok(())
    }

    /// Solve the current input with the current strategy and load the trace.
    /// Returns `None` if no input has been set.
    pub fn calculate(&mut self) -> Option<&Solution> {
        let problem = self.input.as_ref()?;
        let solution = problem.solve(self.strategy);
        self.player.load(solution);
        self.player.solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlayerState;
    use std::time::Duration;

    #[test]
    fn calculate_loads_trace() {
        let mut s = Session::new(ProblemKind::Fibonacci, Strategy::Recursive);
        assert!(s.calculate().is_none());
        s.set_input_text("5", None).expect("valid");
        let answer = s.calculate().map(|sol| sol.answer());
        assert_eq!(answer, Some(5));
        assert_eq!(s.player().state(), PlayerState::Ready);
    }

    #[test]
    fn changes_cancel_playback() {
        let mut s = Session::new(ProblemKind::HouseRobber, Strategy::Memoization);
        s.set_input_text("2,7,9,3,1", None).expect("valid");
        s.calculate();
        assert!(s.player_mut().play());
        s.player_mut().advance(Duration::from_millis(800));
        assert_eq!(s.player().cursor(), 2);

        s.set_strategy(Strategy::Tabulation);
        assert_eq!(s.player().state(), PlayerState::Idle);
        assert_eq!(s.player_mut().advance(Duration::from_secs(10)), 0);
        assert!(s.input().is_some());

        s.calculate();
        s.set_problem(ProblemKind::FrogJump);
        assert_eq!(s.player().state(), PlayerState::Idle);
        assert!(s.input().is_none());
    }

    #[test]
    fn bad_text_keeps_previous_input() {
        let mut s = Session::new(ProblemKind::FrogJump, Strategy::Tabulation);
        s.set_input_text("10,5,20,0,15", Some("2")).expect("valid");
        let err = s.set_input_text("10,5", Some("3"));
        assert!(err.is_err());
        assert_eq!(s.calculate().map(|sol| sol.answer()), Some(15));
    }

    #[test]
    fn set_input_switches_family() {
        let mut s = Session::new(ProblemKind::Fibonacci, Strategy::Tabulation);
        s.set_input(crate::problems::HouseRobber::new(vec![4, 1, 4]).into());
        assert_eq!(s.problem(), ProblemKind::HouseRobber);
        assert_eq!(s.calculate().map(|sol| sol.answer()), Some(8));
    }
}
