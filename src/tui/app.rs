use crate::config::Config;
use crate::grid::models::ItemList;
use crate::grid::selection::SelectionState;
use crate::tui::handlers::{GridAction, HelpModeAction, KeyHandler};
use crate::tui::layout::{FlowLayout, GridLayout, contains};
use crate::tui::navigation::GridCursor;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use tracing::debug;

#[derive(Debug)]
pub struct App {
    pub title: String,
    pub items: ItemList,
    pub selection: SelectionState,
    pub cursor: GridCursor,
    pub flow: FlowLayout,
    pub should_quit: bool,
    pub help_mode: bool,
    /// Tile rectangles from the most recent frame, for mouse hit testing.
    pub grid_layout: GridLayout,
    pub clear_button_area: Rect,
}

impl App {
    pub fn new(items: ItemList, config: &Config) -> Self {
        let selection = SelectionState::new(items.len());
        Self {
            title: config.title.clone(),
            items,
            selection,
            cursor: GridCursor::new(),
            flow: FlowLayout::new(config.columns),
            should_quit: false,
            help_mode: false,
            grid_layout: GridLayout::default(),
            clear_button_area: Rect::default(),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            // Layout is recomputed on every draw.
            _ => Ok(()),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
                self.help_mode = false;
            }
            return Ok(());
        }

        let columns = self.columns();
        match KeyHandler::handle_grid_key(key_event) {
            GridAction::Quit => {
                self.should_quit = true;
            }
            GridAction::ClearSelection => {
                self.clear_all();
            }
            GridAction::MoveCursorUp => self.cursor.move_up(columns),
            GridAction::MoveCursorDown => self.cursor.move_down(columns, self.items.len()),
            GridAction::MoveCursorLeft => self.cursor.move_left(),
            GridAction::MoveCursorRight => self.cursor.move_right(self.items.len()),
            GridAction::ToggleCurrent => {
                self.toggle(self.cursor.index);
            }
            GridAction::ToggleHelpMode => {
                self.help_mode = true;
            }
            GridAction::None => {}
        }
        Ok(())
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if self.help_mode {
            return Ok(());
        }
        let Some((x, y)) = KeyHandler::handle_mouse(mouse_event) else {
            return Ok(());
        };

        if let Some(index) = self.grid_layout.hit_test(x, y) {
            self.cursor.index = index;
            self.toggle(index);
        } else if contains(self.clear_button_area, x, y) {
            self.clear_all();
        }
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let selected = self.selection.toggle(index);
        debug!(index, selected, count = self.selection.count(), "toggled tile");
        selected
    }

    /// No-op while the clear affordance is disabled.
    pub fn clear_all(&mut self) {
        if !self.can_clear() {
            return;
        }
        debug!(cleared = self.selection.count(), "cleared selection");
        self.selection.clear_all();
    }

    pub fn can_clear(&self) -> bool {
        self.selection.can_clear()
    }

    pub fn counter_label(&self) -> String {
        self.selection.counter_label()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Column count of the last frame, or a single column before the first draw.
    fn columns(&self) -> usize {
        self.grid_layout.columns.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn create_test_app() -> App {
        App::new(ItemList::default_palette(), &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code)).unwrap();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    fn with_layout(app: &mut App) {
        app.grid_layout = app.flow.arrange(Rect::new(0, 0, 71, 9), app.total_items(), 0);
        app.clear_button_area = Rect::new(0, 10, 71, 3);
    }

    #[test]
    fn test_new_app_is_empty() {
        let app = create_test_app();
        assert_eq!(app.total_items(), 24);
        assert_eq!(app.selection.count(), 0);
        assert!(!app.can_clear());
        assert_eq!(app.title, "Interactive App");
    }

    #[test]
    fn test_space_toggles_cursor_tile() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.is_selected(0));
        assert_eq!(app.counter_label(), "Selected: 1 of 24");

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.selection.is_selected(0));
        assert_eq!(app.counter_label(), "Selected: 0 of 24");
    }

    #[test]
    fn test_keyboard_scenario() {
        let mut app = create_test_app();
        with_layout(&mut app);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.indices(), vec![0]);
        assert_eq!(app.counter_label(), "Selected: 1 of 24");

        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.indices(), vec![0, 5]);
        assert_eq!(app.counter_label(), "Selected: 2 of 24");

        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection.indices(), vec![5]);
        assert_eq!(app.counter_label(), "Selected: 1 of 24");

        press(&mut app, KeyCode::Char('c'));
        assert!(app.selection.indices().is_empty());
        assert_eq!(app.counter_label(), "Selected: 0 of 24");
        assert!(!app.can_clear());
    }

    #[test]
    fn test_cursor_moves_by_layout_columns() {
        let mut app = create_test_app();
        with_layout(&mut app);
        assert_eq!(app.grid_layout.columns, 8);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor.index, 8);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor.index, 0);
    }

    #[test]
    fn test_mouse_click_toggles_tile() {
        let mut app = create_test_app();
        with_layout(&mut app);

        // Second tile of the second row.
        click(&mut app, 10, 4);
        assert_eq!(app.selection.indices(), vec![9]);
        assert_eq!(app.cursor.index, 9);

        click(&mut app, 10, 4);
        assert!(app.selection.indices().is_empty());
    }

    #[test]
    fn test_mouse_click_in_gap_does_nothing() {
        let mut app = create_test_app();
        with_layout(&mut app);

        click(&mut app, 8, 1);
        assert_eq!(app.selection.count(), 0);
    }

    #[test]
    fn test_mouse_click_clear_button() {
        let mut app = create_test_app();
        with_layout(&mut app);

        click(&mut app, 0, 0);
        click(&mut app, 9, 0);
        assert_eq!(app.selection.count(), 2);

        click(&mut app, 30, 11);
        assert_eq!(app.selection.count(), 0);
        assert!(!app.can_clear());
    }

    #[test]
    fn test_clear_when_empty_is_noop() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.selection.count(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_mode_swallows_grid_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_mode);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection.count(), 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.help_mode);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = create_test_app();
        let mut key_event = KeyEvent::from(KeyCode::Char(' '));
        key_event.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(key_event)).unwrap();
        assert_eq!(app.selection.count(), 0);
    }
}
