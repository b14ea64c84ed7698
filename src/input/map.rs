//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key event to a game action. Unbound keys return `None`.
pub fn decode_key(key: &KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::RotateCw),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::RotateCcw),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Hold)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Quit on `q` or ctrl-c.
pub fn should_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_letters_decode() {
        assert_eq!(decode_key(&key(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(decode_key(&key(KeyCode::Char('d'))), Some(GameAction::MoveRight));
        assert_eq!(decode_key(&key(KeyCode::Down)), Some(GameAction::SoftDrop));
        assert_eq!(decode_key(&key(KeyCode::Char('j'))), Some(GameAction::RotateCcw));
        assert_eq!(decode_key(&key(KeyCode::Up)), Some(GameAction::RotateCw));
        assert_eq!(decode_key(&key(KeyCode::Char(' '))), Some(GameAction::HardDrop));
        assert_eq!(decode_key(&key(KeyCode::Char('h'))), Some(GameAction::Hold));
        assert_eq!(decode_key(&key(KeyCode::Char('r'))), Some(GameAction::Restart));
        assert_eq!(decode_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(&key(KeyCode::Char('q'))));
        assert!(!should_quit(&key(KeyCode::Char('c'))));
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert!(should_quit(&ctrl_c));
    }
}
