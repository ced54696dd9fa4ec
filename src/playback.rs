//! Trace playback: a cursor over a frozen trace, moved by commands or by an
//! owned interval timer.
//!
//! The player never reads a wall clock. A host drives autoplay by reporting
//! elapsed time through [`Player::advance`]; the armed [`IntervalTimer`]
//! turns that into ticks. The timer lives in an `Option` on the player and is
//! dropped on every transition out of [`PlayerState::Playing`], so there is
//! never more than one, and none survives a reload or reset.
//!
//! ```
//! use std::time::Duration;
//! use dp_replay::{Player, PlayerState, problems::Fibonacci, Strategy, TracedProblem};
//!
//! let mut player = Player::new();
//! player.load(Fibonacci::new(3).solve(Strategy::Tabulation));
//! assert!(player.play());
//! player.advance(Duration::from_secs(60));
//! assert_eq!(player.state(), PlayerState::Ready);
//! assert_eq!(player.cursor(), player.total_steps() - 1);
//! ```

use std::time::Duration;

use serde::Serialize;

use crate::controls::Command;
use crate::layout::{position_nodes, LayoutConfig, Point};
use crate::solution::Solution;
use crate::status::{cell_statuses, node_statuses, CellStatus, NodeStatus};
use crate::trace::StepRecord;

/// Autoplay speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];
}

/// Tick intervals per speed, the speed a fresh player starts at, and the
/// canvas used to position call nodes in [`PlaybackView::positions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub slow: Duration,
    pub normal: Duration,
    pub fast: Duration,
    pub initial_speed: Speed,
    pub layout: LayoutConfig,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            slow: Duration::from_millis(800),
            normal: Duration::from_millis(400),
            fast: Duration::from_millis(200),
            initial_speed: Speed::Normal,
            layout: LayoutConfig::default(),
        }
    }
}

impl PlaybackConfig {
    #[inline]
    pub fn interval(&self, speed: Speed) -> Duration {
        match speed {
            Speed::Slow => self.slow,
            Speed::Normal => self.normal,
            Speed::Fast => self.fast,
        }
    }
}

/// Externally visible player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// No solution loaded.
    Idle,
    /// Loaded, timer disarmed.
    Ready,
    /// Timer armed.
    Playing,
}

/// Repeating timer fed by elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Duration,
    pending: Duration,
}

impl IntervalTimer {
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "timer interval must be positive");
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated towards the next tick.
    pub fn pending(&self) -> Duration {
        self.pending
    }

    /// Feed `elapsed` and return how many whole intervals completed.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let total = self.pending.as_nanos() + elapsed.as_nanos();
        let interval = self.interval.as_nanos();
        // remainder < interval, which itself fits a Duration
        self.pending = Duration::from_nanos((total % interval) as u64);
        u64::try_from(total / interval).unwrap_or(u64::MAX)
    }
}

/// What a presentation layer needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackView<'a> {
    pub state: PlayerState,
    pub cursor: usize,
    pub total_steps: usize,
    /// Steps `0..=cursor`.
    pub visible: &'a [StepRecord],
    pub current: Option<&'a StepRecord>,
    /// Indexed by node id; empty for tabulation.
    pub node_statuses: Vec<NodeStatus>,
    /// Indexed by table/memo cell; empty for plain recursion.
    pub cell_statuses: Vec<CellStatus>,
    /// Node coordinates, indexed by node id; empty for tabulation.
    pub positions: Vec<Point>,
}

/// Replays one [`Solution`] step by step.
#[derive(Debug)]
pub struct Player {
    config: PlaybackConfig,
    speed: Speed,
    solution: Option<Solution>,
    cursor: usize,
    timer: Option<IntervalTimer>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Player with the default 800/400/200 ms intervals.
    pub fn new() -> Self {
        Self::with_config(PlaybackConfig::default())
    }

    /// # Panics
    /// Panics if any configured interval is zero.
    pub fn with_config(config: PlaybackConfig) -> Self {
        for speed in Speed::ALL {
            assert!(
                !config.interval(speed).is_zero(),
                "{speed:?} interval must be positive"
            );
        }
        Self {
            speed: config.initial_speed,
            config,
            solution: None,
            cursor: 0,
            timer: None,
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn state(&self) -> PlayerState {
        match (&self.solution, &self.timer) {
            (None, _) => PlayerState::Idle,
            (Some(_), None) => PlayerState::Ready,
            (Some(_), Some(_)) => PlayerState::Playing,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.solution.as_ref().map_or(0, |s| s.trace().len())
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Record under the cursor.
    pub fn current_step(&self) -> Option<&StepRecord> {
        self.solution.as_ref()?.trace().get(self.cursor)
    }

    pub fn can_step_forward(&self) -> bool {
        self.state() == PlayerState::Ready && self.cursor + 1 < self.total_steps()
    }

    pub fn can_step_backward(&self) -> bool {
        self.state() == PlayerState::Ready && self.cursor > 0
    }

    /// Replace whatever is loaded, disarm the timer and rewind to step 0.
    pub fn load(&mut self, solution: Solution) {
        self.timer = None;
        self.cursor = 0;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            problem = %solution.problem(),
            strategy = %solution.strategy(),
            steps = solution.trace().len(),
            "trace loaded"
        );
        self.solution = Some(solution);
    }

    /// Start autoplay. Returns false unless the player was `Ready` with at
    /// least one step.
    pub fn play(&mut self) -> bool {
        if self.state() != PlayerState::Ready || self.total_steps() == 0 {
            return false;
        }
        self.arm();
        #[cfg(feature = "tracing")]
        tracing::debug!(cursor = self.cursor, speed = ?self.speed, "playback started");
        true
    }

    /// Stop autoplay, keeping the cursor.
    pub fn pause(&mut self) -> bool {
        if self.timer.take().is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(cursor = self.cursor, "playback paused");
        true
    }

    /// Pause when playing, play otherwise.
    pub fn toggle(&mut self) -> bool {
        if self.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn step_forward(&mut self) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn step_backward(&mut self) -> bool {
        if !self.can_step_backward() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jump to `step`, clamped to the trace. Only while `Ready`.
    pub fn seek(&mut self, step: usize) -> bool {
        let total = self.total_steps();
        if self.state() != PlayerState::Ready || total == 0 {
            return false;
        }
        let target = step.min(total - 1);
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    /// Drop the timer and the loaded solution.
    pub fn reset(&mut self) {
        self.timer = None;
        self.solution = None;
        self.cursor = 0;
        #[cfg(feature = "tracing")]
        tracing::debug!("player reset");
    }

    /// Change speed; a running timer is replaced by one at the new interval.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        if self.timer.take().is_some() {
            self.arm();
        }
    }

    /// Report elapsed host time. Returns the number of steps the cursor moved.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let ticks = match self.timer.as_mut() {
            Some(timer) => timer.advance(elapsed),
            None => return 0,
        };
        let mut moved = 0;
        for _ in 0..ticks {
            if !self.tick() {
                break;
            }
            moved += 1;
        }
        moved
    }

    /// Apply a control command.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::StepForward => self.step_forward(),
            Command::StepBackward => self.step_backward(),
            Command::TogglePlay => self.toggle(),
        }
    }

    /// Snapshot for rendering; `None` while idle.
    pub fn view(&self) -> Option<PlaybackView<'_>> {
        let solution = self.solution.as_ref()?;
        let trace = solution.trace();
        let (node_statuses, positions) = solution
            .graph()
            .map(|g| {
                (
                    node_statuses(g, trace, self.cursor),
                    position_nodes(g, &self.config.layout),
                )
            })
            .unwrap_or_default();
        Some(PlaybackView {
            state: self.state(),
            cursor: self.cursor,
            total_steps: trace.len(),
            visible: trace.visible(self.cursor),
            current: trace.get(self.cursor),
            node_statuses,
            cell_statuses: cell_statuses(solution.table_len(), trace, self.cursor),
            positions,
        })
    }

    fn arm(&mut self) {
        self.timer = Some(IntervalTimer::new(self.config.interval(self.speed)));
    }

    /// One timer tick: advance, or disarm at the last step.
    fn tick(&mut self) -> bool {
        if self.cursor + 1 >= self.total_steps() {
            self.timer = None;
            #[cfg(feature = "tracing")]
            tracing::debug!(cursor = self.cursor, "playback reached the end");
            return false;
        }
        self.cursor += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(cursor = self.cursor, "tick");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Strategy;
    use crate::problems::{Fibonacci, HouseRobber};
    use crate::traits::TracedProblem;

    const NORMAL: Duration = Duration::from_millis(400);

    fn loaded(n: usize) -> Player {
        let mut p = Player::new();
        p.load(Fibonacci::new(n).solve(Strategy::Tabulation));
        p
    }

    #[test]
    fn timer_carries_remainder() {
        let mut t = IntervalTimer::new(Duration::from_millis(100));
        assert_eq!(t.advance(Duration::from_millis(250)), 2);
        assert_eq!(t.pending(), Duration::from_millis(50));
        assert_eq!(t.advance(Duration::from_millis(50)), 1);
        assert_eq!(t.pending(), Duration::ZERO);
    }

    #[test]
    fn idle_until_loaded() {
        let mut p = Player::new();
        assert_eq!(p.state(), PlayerState::Idle);
        assert!(!p.play());
        assert!(!p.step_forward());
        assert!(p.view().is_none());
        assert_eq!(p.advance(Duration::from_secs(5)), 0);
    }

    #[test]
    fn load_sets_ready_at_zero() {
        let p = loaded(4);
        assert_eq!(p.state(), PlayerState::Ready);
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.total_steps(), 5);
    }

    #[test]
    fn play_ticks_then_stops_at_end() {
        let mut p = loaded(4);
        assert!(p.play());
        assert_eq!(p.state(), PlayerState::Playing);
        assert_eq!(p.advance(NORMAL / 2), 0);
        assert_eq!(p.advance(NORMAL / 2), 1);
        assert_eq!(p.cursor(), 1);
        assert_eq!(p.advance(NORMAL * 3), 3);
        assert_eq!(p.cursor(), 4);
        assert!(p.is_playing());
        // the next tick finds the last step and disarms
        assert_eq!(p.advance(NORMAL), 0);
        assert_eq!(p.state(), PlayerState::Ready);
        assert_eq!(p.cursor(), 4);
    }

    #[test]
    fn stepping_only_while_ready() {
        let mut p = loaded(4);
        assert!(!p.step_backward());
        assert!(p.step_forward());
        assert!(p.play());
        assert!(!p.step_forward());
        assert!(!p.seek(3));
        assert!(p.pause());
        assert!(!p.pause());
        assert!(p.seek(99));
        assert_eq!(p.cursor(), 4);
        assert!(!p.step_forward());
    }

    #[test]
    fn speed_change_rearms_without_double_ticking() {
        let mut p = loaded(10);
        p.play();
        p.advance(Duration::from_millis(300));
        p.set_speed(Speed::Fast);
        assert!(p.is_playing());
        // the 300 ms accumulated under the old timer is discarded
        assert_eq!(p.advance(Duration::from_millis(199)), 0);
        assert_eq!(p.advance(Duration::from_millis(1)), 1);

        p.pause();
        p.set_speed(Speed::Slow);
        assert!(!p.is_playing());
        assert_eq!(p.speed(), Speed::Slow);
    }

    #[test]
    fn reload_and_reset_cancel_timer() {
        let mut p = loaded(10);
        p.play();
        p.advance(NORMAL * 3);
        p.load(HouseRobber::new(vec![1, 2]).solve(Strategy::Recursive));
        assert_eq!(p.state(), PlayerState::Ready);
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.advance(NORMAL * 10), 0);

        p.play();
        p.reset();
        assert_eq!(p.state(), PlayerState::Idle);
        assert_eq!(p.total_steps(), 0);
        assert_eq!(p.advance(NORMAL * 10), 0);
    }

    #[test]
    fn empty_trace_cannot_play() {
        let mut p = Player::new();
        p.load(HouseRobber::new(vec![]).solve(Strategy::Memoization));
        assert_eq!(p.state(), PlayerState::Ready);
        assert!(!p.play());
        assert!(!p.step_forward());
        assert!(!p.seek(0));
        assert!(p.current_step().is_none());
    }

    #[test]
    fn view_tracks_cursor() {
        let mut p = Player::new();
        p.load(Fibonacci::new(3).solve(Strategy::Memoization));
        p.seek(2);
        let view = p.view().expect("loaded");
        assert_eq!(view.visible.len(), 3);
        assert_eq!(view.current.map(|r| r.step), Some(2));
        assert_eq!(view.node_statuses.len(), 5);
        assert_eq!(view.cell_statuses.len(), 4);
        assert_eq!(view.node_statuses[0], NodeStatus::Active);
        assert_eq!(view.positions.len(), 5);
        assert_eq!(view.positions[0].y, 50.0);
    }

    #[test]
    fn tabulation_view_has_no_positions() {
        let p = loaded(4);
        let view = p.view().expect("loaded");
        assert!(view.positions.is_empty());
        assert!(view.node_statuses.is_empty());
        assert_eq!(view.cell_statuses.len(), 5);
    }

    #[test]
    fn timer_saturates_tick_count() {
        let mut t = IntervalTimer::new(Duration::from_nanos(1));
        assert_eq!(t.advance(Duration::MAX), u64::MAX);
        assert_eq!(t.pending(), Duration::ZERO);
    }
}
