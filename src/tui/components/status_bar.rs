// Status bar component
//
// Footer credit, with the most recent warning or error from the log buffer
// on the left when there is one.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let credit = match &app.user_name {
        Some(name) => format!("Made with ❤️ for {} | Powered by TheMealDB", name),
        None => "Made with ❤️ | Powered by TheMealDB".to_string(),
    };

    let warning = app.log_buffer.latest_at_least(LogLevel::Warn);

    let line = match warning {
        // Compact terminals have room for one or the other
        Some(entry) if !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) => {
            Line::from(Span::styled(
                format!(" ⚠ {}", entry.message),
                Style::default().fg(theme.warning),
            ))
        }
        Some(entry) => Line::from(vec![
            Span::styled(
                format!(
                    " ⚠ {} {} {} ",
                    entry.timestamp.with_timezone(&Local).format("%H:%M:%S"),
                    entry.level.as_str(),
                    entry.message
                ),
                Style::default().fg(theme.warning),
            ),
            Span::raw("│ "),
            Span::raw(credit),
        ]),
        None => Line::from(credit).alignment(Alignment::Center),
    };

    let status = Paragraph::new(line)
        .style(theme.bar_style())
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
