// Search result list
//
// One row per recipe summary, cursor row highlighted. Wide terminals also
// show the thumbnail link.

use crate::api::RecipeSummary;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, recipes: &[RecipeSummary]) {
    let theme = &app.theme;
    let show_thumbnails = Breakpoint::from_width(area.width).at_least(Breakpoint::Wide);

    let items: Vec<ListItem> = recipes
        .iter()
        .map(|recipe| {
            let mut spans = vec![Span::raw(format!("🍽  {}", recipe.name))];
            if show_thumbnails && !recipe.thumbnail_url.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", recipe.thumbnail_url),
                    Style::default().fg(theme.muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = match app.state().last_query() {
        Some(query) => format!(" Recipes with {} ({}) ", query, recipes.len()),
        None => format!(" Recipes ({}) ", recipes.len()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(!app.search_focused))
                .title(title)
                .title_top(Line::from(" Enter open ").right_aligned()),
        )
        .style(Style::default().fg(theme.fg))
        .highlight_style(theme.selected_style())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(app.state().cursor()));
    f.render_stateful_widget(list, area, &mut list_state);
}
