// Contact tab

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const SUPPORT_EMAIL: &str = "support@recipefinder.com";
pub const LOCATION: &str = "New York, USA";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = Style::default().fg(theme.fg);
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("Contact", theme.heading_style())),
        Line::default(),
        Line::from(Span::styled(format!("📧 Email: {}", SUPPORT_EMAIL), text)),
        Line::from(Span::styled(format!("📍 Location: {}", LOCATION), text)),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        super::centered_column(area),
    );
}
