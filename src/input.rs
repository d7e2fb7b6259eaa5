use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::ScreenState;
use crate::engine::Command;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    Pause,
    Resume,
    Restart,
    Quit,
}

impl InputAction {
    /// The engine command this action forwards, if any
    pub fn command(self) -> Option<Command> {
        match self {
            InputAction::MoveLeft => Some(Command::MoveLeft),
            InputAction::MoveRight => Some(Command::MoveRight),
            InputAction::Fire => Some(Command::Fire),
            InputAction::Restart => Some(Command::Restart),
            InputAction::Pause | InputAction::Resume | InputAction::Quit => None,
        }
    }
}

/// Manages input polling and translates raw key events into game actions.
///
/// Every key press (or terminal auto-repeat) yields one action, so holding an
/// arrow key moves the cannon at the terminal's repeat rate.
#[derive(Debug, Default)]
pub struct InputManager {
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all pending terminal events without blocking.
    /// Should be called once per frame before [`InputManager::actions`].
    pub fn poll_events(&mut self, state: ScreenState) -> color_eyre::Result<()> {
        self.actions.clear();

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()?
                && let Some(action) = map_key_event(key_event, state)
            {
                self.actions.push(action);
            }
        }

        Ok(())
    }

    /// Actions gathered by the last poll, in arrival order
    pub fn actions(&self) -> &[InputAction] {
        &self.actions
    }
}

/// Translates a single key event, honouring which screen is showing
pub fn map_key_event(key_event: KeyEvent, state: ScreenState) -> Option<InputAction> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    // Quit and restart work on every screen
    if matches!(
        key_event.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(InputAction::Quit);
    }
    if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        return Some(InputAction::Restart);
    }

    match state {
        ScreenState::Paused => {
            matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P'))
                .then_some(InputAction::Resume)
        }
        ScreenState::GameOver => None,
        ScreenState::Playing | ScreenState::Cleared => match key_event.code {
            KeyCode::Char('p') | KeyCode::Char('P') => Some(InputAction::Pause),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                Some(InputAction::MoveLeft)
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                Some(InputAction::MoveRight)
            }
            KeyCode::Char(' ') => Some(InputAction::Fire),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_and_fire_keys() {
        let state = ScreenState::Playing;
        assert_eq!(map_key_event(press(KeyCode::Left), state), Some(InputAction::MoveLeft));
        assert_eq!(map_key_event(press(KeyCode::Char('a')), state), Some(InputAction::MoveLeft));
        assert_eq!(map_key_event(press(KeyCode::Right), state), Some(InputAction::MoveRight));
        assert_eq!(map_key_event(press(KeyCode::Char('D')), state), Some(InputAction::MoveRight));
        assert_eq!(map_key_event(press(KeyCode::Char(' ')), state), Some(InputAction::Fire));
        assert_eq!(map_key_event(press(KeyCode::Char('x')), state), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release, ScreenState::Playing), None);
    }

    #[test]
    fn test_repeat_events_count_as_presses() {
        let repeat = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(repeat, ScreenState::Playing), Some(InputAction::Fire));
    }

    #[test]
    fn test_game_over_only_accepts_restart_and_quit() {
        let state = ScreenState::GameOver;
        assert_eq!(map_key_event(press(KeyCode::Left), state), None);
        assert_eq!(map_key_event(press(KeyCode::Char(' ')), state), None);
        assert_eq!(map_key_event(press(KeyCode::Char('p')), state), None);
        assert_eq!(map_key_event(press(KeyCode::Char('r')), state), Some(InputAction::Restart));
        assert_eq!(map_key_event(press(KeyCode::Esc), state), Some(InputAction::Quit));
    }

    #[test]
    fn test_pause_toggle() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('p')), ScreenState::Playing),
            Some(InputAction::Pause)
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('P')), ScreenState::Paused),
            Some(InputAction::Resume)
        );
        assert_eq!(map_key_event(press(KeyCode::Left), ScreenState::Paused), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c, ScreenState::Playing), Some(InputAction::Quit));
    }

    #[test]
    fn test_action_commands() {
        assert_eq!(InputAction::MoveLeft.command(), Some(Command::MoveLeft));
        assert_eq!(InputAction::Fire.command(), Some(Command::Fire));
        assert_eq!(InputAction::Restart.command(), Some(Command::Restart));
        assert_eq!(InputAction::Pause.command(), None);
        assert_eq!(InputAction::Quit.command(), None);
    }
}
