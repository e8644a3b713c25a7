// Collapsible menu dropdown
//
// Drawn under the right end of the title bar while the menu is open. The
// cursor row is highlighted; the active tab is marked in the accent color.

use crate::state::Tab;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 18;

/// `area` is the full frame; `top` is the first row below the title bar
pub fn render(f: &mut Frame, area: Rect, top: u16, app: &App) {
    let theme = &app.theme;
    let height = Tab::ALL.len() as u16 + 2;
    let width = MENU_WIDTH.min(area.width);
    let left = area.right().saturating_sub(width);
    let menu_area = Rect::new(left, top, width, height).intersection(area);

    let active = app.state().tab();
    let lines: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let marker = if *tab == active { "●" } else { " " };
            let text = format!(" {} {}", marker, tab.title());
            let style = if i == app.menu_cursor {
                theme.selected_style()
            } else if *tab == active {
                Style::default()
                    .fg(theme.active_tab)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.bar_fg)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.bar_fg))
        .style(theme.bar_style());

    f.render_widget(Clear, menu_area);
    f.render_widget(Paragraph::new(lines).block(block), menu_area);
}
