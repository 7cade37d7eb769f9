use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveLeft,
    MoveRight,
    /// Context-dependent primary action: start the game, confirm the
    /// memorized card, choose the pile under the cursor, or play again.
    Activate,
    SelectPile(usize),
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::ToggleHelp,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Char(' ') => InputAction::Activate,
        KeyCode::Char('1') => InputAction::SelectPile(0),
        KeyCode::Char('2') => InputAction::SelectPile(1),
        KeyCode::Char('3') => InputAction::SelectPile(2),
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_basic_actions() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            InputAction::Activate
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            InputAction::MoveLeft
        );
    }

    #[test]
    fn maps_digit_keys_to_piles() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            InputAction::SelectPile(0)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            InputAction::SelectPile(2)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE)),
            InputAction::None
        );
    }
}
