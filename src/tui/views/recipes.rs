// Recipes tab: search box, optional error banner, then exactly one body
// (prompt, loading, no results, list or detail) as resolved by the state.

use crate::state::{Lookup, RecipesPanel};
use crate::tui::app::App;
use crate::tui::components::{error_banner, recipe_detail, recipe_list, search_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let banner_height = if app.state().error().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(3),
        ])
        .split(area);

    search_bar::render(f, chunks[0], app);
    if let Some(error) = app.state().error() {
        error_banner::render(f, chunks[1], app, error);
    }

    let body = chunks[2];
    match app.state().recipes_panel() {
        RecipesPanel::Prompt => message(
            f,
            body,
            app,
            "Press / and type an ingredient, then Enter to find recipes.".to_string(),
        ),
        RecipesPanel::Loading(lookup) => loading(f, body, app, lookup),
        RecipesPanel::NoResults(query) => {
            message(f, body, app, format!("No recipes found for \"{}\".", query))
        }
        RecipesPanel::List(recipes) => recipe_list::render(f, body, app, recipes),
        RecipesPanel::Detail(detail) => recipe_detail::render(f, body, app, detail),
    }
}

fn message(f: &mut Frame, area: Rect, app: &App, text: String) {
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(text, Style::default().fg(app.theme.muted))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn loading(f: &mut Frame, area: Rect, app: &App, lookup: &Lookup) {
    let style = Style::default()
        .fg(app.theme.loading)
        .add_modifier(Modifier::BOLD);
    let subject = match lookup {
        Lookup::Search { ingredient } => format!("searching \"{}\"", ingredient),
        Lookup::Detail { id } => format!("recipe {}", id),
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{} Loading recipes...", app.spinner_char()),
            style,
        )),
        Line::from(Span::styled(subject, Style::default().fg(app.theme.muted))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
