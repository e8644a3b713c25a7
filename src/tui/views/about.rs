// About tab

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const ABOUT: &str = "Recipe Finder is made for busy people who don't have time to \
plan meals. Enter an ingredient to explore recipes from around the world and \
cook something delicious without stress.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("About", theme.heading_style())),
        Line::default(),
        Line::from(Span::styled(ABOUT, Style::default().fg(theme.fg))),
        Line::default(),
        Line::from(Span::styled(
            "Powered by TheMealDB API",
            Style::default().fg(theme.heading),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("v{} · theme {}", VERSION, app.theme_kind.name()),
            Style::default().fg(theme.muted),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        super::centered_column(area),
    );
}
