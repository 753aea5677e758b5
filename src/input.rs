//! Input modes and key dispatch.

use crossterm::event::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};

use crate::game::Action;

/// What the caller should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Feed the action to the engine.
    Act(Action),
    /// Leave the game.
    Quit,
}

/// The active input-handling mode.
///
/// Swapped on the engine as the session changes state: the main mode maps
/// movement keys to actions, the game-over mode only lets the player leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventHandler {
    /// Normal play: movement, waiting, quitting.
    MainGame,
    /// The player is dead; only quitting remains.
    GameOver,
}

impl EventHandler {
    /// Map a key press to a command, if it means anything in this mode.
    #[must_use]
    pub fn dispatch(self, key: KeyEvent) -> Option<Command> {
        match self {
            EventHandler::MainGame => dispatch_main_game(key),
            EventHandler::GameOver => dispatch_game_over(key),
        }
    }
}

/// Movement deltas for arrow keys, vi keys, and the diagonal home-row keys.
fn movement_delta(code: KeyCode) -> Option<(i32, i32)> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some((0, -1)),
        KeyCode::Down | KeyCode::Char('j') => Some((0, 1)),
        KeyCode::Left | KeyCode::Char('h') => Some((-1, 0)),
        KeyCode::Right | KeyCode::Char('l') => Some((1, 0)),
        KeyCode::Char('y') => Some((-1, -1)),
        KeyCode::Char('u') => Some((1, -1)),
        KeyCode::Char('b') => Some((-1, 1)),
        KeyCode::Char('n') => Some((1, 1)),
        _ => None,
    }
}

fn dispatch_main_game(key: KeyEvent) -> Option<Command> {
    if let Some((dx, dy)) = movement_delta(key.code) {
        return Some(Command::Act(Action::Bump { dx, dy }));
    }
    match key.code {
        KeyCode::Char('.' | ' ') => Some(Command::Act(Action::Wait)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

fn dispatch_game_over(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_game_movement_keys() {
        let handler = EventHandler::MainGame;
        assert_eq!(
            handler.dispatch(press(KeyCode::Up)),
            Some(Command::Act(Action::Bump { dx: 0, dy: -1 }))
        );
        assert_eq!(
            handler.dispatch(press(KeyCode::Char('h'))),
            Some(Command::Act(Action::Bump { dx: -1, dy: 0 }))
        );
        assert_eq!(
            handler.dispatch(press(KeyCode::Char('n'))),
            Some(Command::Act(Action::Bump { dx: 1, dy: 1 }))
        );
    }

    #[test]
    fn test_main_game_wait_and_quit() {
        let handler = EventHandler::MainGame;
        assert_eq!(
            handler.dispatch(press(KeyCode::Char('.'))),
            Some(Command::Act(Action::Wait))
        );
        assert_eq!(handler.dispatch(press(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn test_main_game_ignores_unbound_keys() {
        let handler = EventHandler::MainGame;
        assert_eq!(handler.dispatch(press(KeyCode::Char('z'))), None);
        assert_eq!(handler.dispatch(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_game_over_only_quits() {
        let handler = EventHandler::GameOver;
        assert_eq!(handler.dispatch(press(KeyCode::Up)), None);
        assert_eq!(handler.dispatch(press(KeyCode::Char('.'))), None);
        assert_eq!(handler.dispatch(press(KeyCode::Char('q'))), Some(Command::Quit));
    }
}
