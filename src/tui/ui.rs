use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

// Material 3 baseline scheme.
pub const PRIMARY: Color = Color::Rgb(0x67, 0x50, 0xA4);
pub const PRIMARY_CONTAINER: Color = Color::Rgb(0xEA, 0xDD, 0xFF);
pub const ON_PRIMARY_CONTAINER: Color = Color::Rgb(0x21, 0x00, 0x5D);
pub const TILE_BORDER: Color = Color::DarkGray;
pub const CURSOR: Color = Color::Yellow;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Counter
            Constraint::Length(1),
            Constraint::Min(0),    // Tiles
            Constraint::Length(3), // Clear button
            Constraint::Length(1), // Key hints
        ])
        .split(frame.size());

    draw_title(frame, chunks[0], app);
    draw_counter(frame, chunks[1], app);
    draw_grid(frame, chunks[3], app);
    draw_clear_button(frame, chunks[4], app);
    draw_footer(frame, chunks[5]);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(app.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(title, area);
}

fn draw_counter(frame: &mut Frame, area: Rect, app: &App) {
    let counter = Paragraph::new(app.counter_label()).alignment(Alignment::Center);

    frame.render_widget(counter, area);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let columns = app.flow.columns(area.width);
    let visible_rows = app.flow.visible_rows(area.height);
    app.cursor.update_scroll(columns, visible_rows, app.total_items());

    app.grid_layout = app
        .flow
        .arrange(area, app.total_items(), app.cursor.scroll_row);

    for &(index, rect) in &app.grid_layout.tiles {
        let Some(item) = app.items.get(index) else {
            continue;
        };
        let is_selected = app.selection.is_selected(index);
        let is_cursor = index == app.cursor.index;

        let (fill, label_color, border_type, border_color) = if is_selected {
            (PRIMARY_CONTAINER, ON_PRIMARY_CONTAINER, BorderType::Thick, PRIMARY)
        } else {
            (item.color.into(), Color::White, BorderType::Plain, TILE_BORDER)
        };
        let border_color = if is_cursor { CURSOR } else { border_color };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color).bg(fill));

        let tile = Paragraph::new(item.label.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(fill)
                    .fg(label_color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        frame.render_widget(tile, rect);
    }
}

fn draw_clear_button(frame: &mut Frame, area: Rect, app: &mut App) {
    let style = if app.can_clear() {
        Style::default()
            .bg(PRIMARY)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new("Clear Selection")
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    app.clear_button_area = area;
    frame.render_widget(button, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("click/Space: toggle | ←↑↓→/hjkl: move | c/Esc: clear | ?: help | q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Button Grid - Controls",
        "",
        "SELECTION:",
        "  Left click        Toggle the clicked tile",
        "  Space / Enter     Toggle the tile under the cursor",
        "  c / Esc           Clear the selection",
        "",
        "NAVIGATION:",
        "  ←↑↓→ / h j k l    Move the cursor",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: false });

    let area = centered_rect(70, 60, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
