// Ingredient search box

use crate::tui::app::App;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "Enter ingredient (e.g., chicken)";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let ingredient = app.state().ingredient();
    let focused = app.search_focused;

    let text = if ingredient.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)))
    } else {
        Line::from(Span::styled(ingredient, Style::default().fg(theme.fg)))
    };

    let hint = if focused {
        " Enter search · Esc done ".to_string()
    } else {
        match app.state().recipes().len() {
            0 => " / to type ".to_string(),
            n => format!(" {} results · / to type ", n),
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .title(" 🔍 Search ")
        .title_top(Line::from(hint).right_aligned());

    let inner = block.inner(area);
    f.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let offset = (ingredient.width() as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}
