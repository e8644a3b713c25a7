// Title bar component
//
// App name on the left. Tabs are rendered inline on the right, or collapse
// into a ☰/✖ menu button on compact terminals.

use crate::state::Tab;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Glyph for the collapsed menu button
pub fn menu_button(open: bool) -> &'static str {
    if open {
        "✖"
    } else {
        "☰"
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.bar_fg))
        .style(theme.bar_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut title_text = match &app.user_name {
        Some(name) => format!(" 🍳 {}'s Recipe Finder", name),
        None => " 🍳 Recipe Finder".to_string(),
    };
    if app.state().is_loading() {
        title_text.push_str(&format!(" {}", app.spinner_char()));
    }
    let title = Paragraph::new(title_text).style(
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    );

    let nav = if Breakpoint::from_width(area.width).collapses_nav() {
        Line::from(Span::styled(
            format!("{} ", menu_button(app.state().menu_open())),
            Style::default()
                .fg(theme.bar_fg)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        nav_tabs(app)
    };
    let nav_width = nav.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(nav_width)])
        .split(inner);

    f.render_widget(title, chunks[0]);
    f.render_widget(Paragraph::new(nav).alignment(Alignment::Right), chunks[1]);
}

/// Inline tabs, active one highlighted
fn nav_tabs(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let active = app.state().tab();

    let spans: Vec<Span> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let label = format!(" {} {} ", i + 1, tab.title());
            if *tab == active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(theme.active_tab)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(theme.bar_fg))
            }
        })
        .collect();
    Line::from(spans)
}
