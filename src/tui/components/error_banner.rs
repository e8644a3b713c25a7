// Dismissible error banner for failed lookups

use crate::api::ApiError;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, error: &ApiError) {
    let theme = &app.theme;

    let line = Line::from(vec![
        Span::styled(" ⚠ ", theme.error_style()),
        Span::styled(error.to_string(), Style::default().fg(theme.fg)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .title(Span::styled(
            format!(" {} ", error.label()),
            theme.error_style(),
        ))
        .title_top(Line::from(" x dismiss ").right_aligned());

    f.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
