//! Keyboard bindings for playback.
//!
//! - `→` / `l`: step forward
//! - `←` / `h`: step backward
//! - space: play/pause
//!
//! Keys are ignored while a text input has focus or while nothing is loaded.

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    Space,
    Char(char),
    Other,
}

/// Playback command a key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StepForward,
    StepBackward,
    TogglePlay,
}

/// Host context that can suppress bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub input_focused: bool,
    /// False while there are no steps to play.
    pub enabled: bool,
}

/// Map a key press to a command, if it is bound and not suppressed.
pub fn bind(key: Key, ctx: KeyContext) -> Option<Command> {
    if ctx.input_focused || !ctx.enabled {
        return None;
    }
    match key {
        Key::Right | Key::Char('l') => Some(Command::StepForward),
        Key::Left | Key::Char('h') => Some(Command::StepBackward),
        Key::Space | Key::Char(' ') => Some(Command::TogglePlay),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: KeyContext = KeyContext {
        input_focused: false,
        enabled: true,
    };

    #[test]
    fn arrows_and_vim_keys() {
        assert_eq!(bind(Key::Right, LIVE), Some(Command::StepForward));
        assert_eq!(bind(Key::Char('l'), LIVE), Some(Command::StepForward));
        assert_eq!(bind(Key::Left, LIVE), Some(Command::StepBackward));
        assert_eq!(bind(Key::Char('h'), LIVE), Some(Command::StepBackward));
        assert_eq!(bind(Key::Space, LIVE), Some(Command::TogglePlay));
        assert_eq!(bind(Key::Char('r'), LIVE), None);
        assert_eq!(bind(Key::Other, LIVE), None);
    }

    #[test]
    fn focus_and_disabled_suppress() {
        let typing = KeyContext {
            input_focused: true,
            enabled: true,
        };
        assert_eq!(bind(Key::Space, typing), None);
        assert_eq!(bind(Key::Right, KeyContext::default()), None);
    }
}
