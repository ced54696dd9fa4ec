use std::time::Duration;

use crate::layout::LayoutConfig;
use crate::playback::{PlaybackConfig, Player, Speed};

pub struct PlayerBuilder {
    config: PlaybackConfig,
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self {
            config: PlaybackConfig::default(),
        }
    }
    pub fn with_interval(mut self, speed: Speed, interval: Duration) -> Self {
        match speed {
            Speed::Slow => self.config.slow = interval,
            Speed::Normal => self.config.normal = interval,
            Speed::Fast => self.config.fast = interval,
        }
        self
    }
    pub fn with_initial_speed(mut self, speed: Speed) -> Self {
        self.config.initial_speed = speed;
        self
    }
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }
    pub fn build(self) -> Player {
        Player::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply() {
        let player = PlayerBuilder::new()
            .with_interval(Speed::Fast, Duration::from_millis(50))
            .with_initial_speed(Speed::Fast)
            .build();
        assert_eq!(player.speed(), Speed::Fast);
        assert_eq!(player.config().fast, Duration::from_millis(50));
        assert_eq!(player.config().slow, Duration::from_millis(800));
    }

    #[test]
    fn layout_reaches_view_positions() {
        use crate::problems::Fibonacci;
        use crate::{Strategy, TracedProblem};

        let mut player = PlayerBuilder::new()
            .with_layout(LayoutConfig {
                width: 200.0,
                top: 10.0,
                level_height: 20.0,
            })
            .build();
        player.load(Fibonacci::new(2).solve(Strategy::Recursive));
        let view = player.view().expect("loaded");
        // f2 centred on top, f1 and f0 one level down at thirds
        let xs: Vec<_> = view.positions.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xs[0], (100.0, 10.0));
        assert_eq!(xs[1].1, 30.0);
        assert!(xs[1].0 < xs[2].0);
    }

    #[test]
    #[should_panic]
    fn zero_interval_rejected() {
        let _ = PlayerBuilder::new()
            .with_interval(Speed::Normal, Duration::ZERO)
            .build();
    }
}
