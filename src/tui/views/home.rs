// Home tab: greeting and pitch

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const PITCH: &str = "Had a busy day? Don't worry. We'll help you cook something quick \
and tasty from what's already in your kitchen. Just type an ingredient and get \
recipe ideas instantly.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(app.greeting(), theme.heading_style())),
        Line::default(),
        Line::from(Span::styled(PITCH, Style::default().fg(theme.fg))),
        Line::default(),
        Line::from(Span::styled(
            "Press 2 to start searching",
            Style::default().fg(theme.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, super::centered_column(area));
}
