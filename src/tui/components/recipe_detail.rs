// Recipe detail panel
//
// Name, category, area, tags, ingredients and instructions in one
// scrollable paragraph. Esc returns to the list, y copies the recipe.

use crate::api::RecipeDetail;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, detail: &RecipeDetail) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true))
        .title(" Recipe ")
        .title_top(Line::from(" Esc ✕ · y copy ").right_aligned());

    let paragraph = Paragraph::new(detail_lines(detail, theme))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    f.render_widget(paragraph, area);
}

fn labelled<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, theme.label_style()),
        Span::styled(value, Style::default().fg(theme.fg)),
    ])
}

fn detail_lines<'a>(detail: &'a RecipeDetail, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        detail.name.as_str(),
        theme.heading_style(),
    ))];
    if !detail.thumbnail_url.is_empty() {
        lines.push(Line::from(Span::styled(
            detail.thumbnail_url.as_str(),
            Style::default().fg(theme.muted),
        )));
    }
    lines.push(Line::default());

    lines.push(labelled(
        "Category: ",
        detail.category.as_deref().unwrap_or("-"),
        theme,
    ));
    lines.push(labelled(
        "Area: ",
        detail.area.as_deref().unwrap_or("-"),
        theme,
    ));
    if !detail.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", theme.label_style()),
            Span::styled(detail.tags.join(", "), Style::default().fg(theme.fg)),
        ]));
    }

    if !detail.ingredients.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Ingredients:",
            theme.label_style(),
        )));
        for ingredient in &detail.ingredients {
            let text = if ingredient.measure.is_empty() {
                format!("  • {}", ingredient.name)
            } else {
                format!("  • {} {}", ingredient.measure, ingredient.name)
            };
            lines.push(Line::from(Span::styled(text, Style::default().fg(theme.fg))));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Instructions:", theme.label_style())));
    for paragraph in detail.instructions.lines() {
        lines.push(Line::from(Span::styled(
            paragraph,
            Style::default().fg(theme.fg),
        )));
    }

    if let Some(url) = &detail.source_url {
        lines.push(Line::default());
        lines.push(labelled("Source: ", url, theme));
    }
    if let Some(url) = &detail.video_url {
        lines.push(labelled("Video: ", url, theme));
    }
    lines
}
