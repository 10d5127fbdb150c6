//! Input module - keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameCommand;

/// Map keyboard input to game commands
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Flap
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            Some(GameCommand::Flap)
        }

        // Start / play again
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Start),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Char('w'),
            KeyCode::Char('k'),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameCommand::Flap)
            );
        }
    }

    #[test]
    fn start_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameCommand::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameCommand::Start)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
