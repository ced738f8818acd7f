use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_grid_key(key_event: KeyEvent) -> GridAction {
        match key_event.code {
            KeyCode::Char('q') => GridAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                GridAction::Quit
            }
            KeyCode::Esc | KeyCode::Char('c') => GridAction::ClearSelection,
            KeyCode::Up | KeyCode::Char('k') => GridAction::MoveCursorUp,
            KeyCode::Down | KeyCode::Char('j') => GridAction::MoveCursorDown,
            KeyCode::Left | KeyCode::Char('h') => GridAction::MoveCursorLeft,
            KeyCode::Right | KeyCode::Char('l') => GridAction::MoveCursorRight,
            KeyCode::Enter | KeyCode::Char(' ') => GridAction::ToggleCurrent,
            KeyCode::Char('?') => GridAction::ToggleHelpMode,
            _ => GridAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    /// Only a left-button press counts as a tap.
    pub fn handle_mouse(mouse_event: MouseEvent) -> Option<(u16, u16)> {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((mouse_event.column, mouse_event.row)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum GridAction {
    None,
    Quit,
    ClearSelection,
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    ToggleCurrent,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}
