//! Key mapping from terminal events to the arcade button.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that act as the physical button.
pub fn is_button_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ')
            | KeyCode::Enter
            | KeyCode::Up
            | KeyCode::Char('k')
            | KeyCode::Char('K')
    )
}

/// Keys that synthesize a hold past the long-press threshold.
///
/// Needed on terminals that never report key releases, where a real hold
/// cannot be told apart from a tap.
pub fn is_long_press_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Char('L')
    )
}

/// Check if key should quit the arcade.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_button_keys() {
        assert!(is_button_key(KeyCode::Char(' ')));
        assert!(is_button_key(KeyCode::Enter));
        assert!(is_button_key(KeyCode::Up));
        assert!(is_button_key(KeyCode::Char('K')));
        assert!(!is_button_key(KeyCode::Char('x')));
        assert!(!is_button_key(KeyCode::Tab));
    }

    #[test]
    fn test_long_press_keys() {
        assert!(is_long_press_key(KeyCode::Tab));
        assert!(is_long_press_key(KeyCode::Char('l')));
        assert!(!is_long_press_key(KeyCode::Char(' ')));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
