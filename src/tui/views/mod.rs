// Views module - screen-level rendering
//
// Every frame is title bar, tab body, footer. The body is chosen from the
// active tab alone:
// - Home: greeting and pitch
// - Recipes: search, results and detail
// - About / Contact: static text
//
// The menu dropdown and toast are drawn last, over everything else.

mod about;
mod contact;
mod home;
mod recipes;

use super::app::App;
use crate::state::Tab;
use crate::tui::components::{self, menu};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    f.render_widget(Block::default().style(app.theme.base_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    let body = chunks[1];
    match app.state().tab() {
        Tab::Home => home::render(f, body, app),
        Tab::Recipes => recipes::render(f, body, app),
        Tab::About => about::render(f, body, app),
        Tab::Contact => contact::render(f, body, app),
    }

    components::render_status(f, chunks[2], app);

    if app.state().menu_open() {
        menu::render(f, f.area(), chunks[0].bottom(), app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Middle column for the text-only tabs, at most 80 cells wide
fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(80);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
