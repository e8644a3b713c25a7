// Theme system for the TUI
//
// Two palettes: a light "Garden" theme (greens on white, yellow for the
// active tab) and a dark "Night Garden" variant.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Garden,
    NightGarden,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Garden, ThemeKind::NightGarden]
    }

    /// Parse a configured theme name; unknown names fall back to Garden
    ///
    /// Matching ignores case and punctuation, so "night-garden" works.
    pub fn from_name(name: &str) -> Self {
        let wanted = normalize(name);
        let found = Self::all()
            .iter()
            .find(|kind| normalize(kind.name()) == wanted);
        match found {
            Some(kind) => *kind,
            None => {
                tracing::warn!("Unknown theme {:?}, using Garden", name);
                ThemeKind::Garden
            }
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Garden => "Garden",
            ThemeKind::NightGarden => "Night Garden",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Garden => Theme::garden(),
            ThemeKind::NightGarden => Theme::night_garden(),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title bar and footer
    pub title: Color,
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub active_tab: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Recipe content
    pub heading: Color,
    pub label: Color,
    pub loading: Color,

    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden()
    }
}

impl Theme {
    /// Garden theme (default)
    pub fn garden() -> Self {
        Self {
            bg: Color::Rgb(0xf0, 0xfd, 0xf4),
            fg: Color::Rgb(0x37, 0x41, 0x51),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            border: Color::Rgb(0x4a, 0xde, 0x80),
            border_focused: Color::Rgb(0x16, 0xa3, 0x4a),

            title: Color::White,
            bar_bg: Color::Rgb(0x15, 0x80, 0x3d),
            bar_fg: Color::White,
            active_tab: Color::Rgb(0xfd, 0xe0, 0x47),

            selected_bg: Color::Rgb(0x16, 0xa3, 0x4a),
            selected_fg: Color::White,

            heading: Color::Rgb(0x15, 0x80, 0x3d),
            label: Color::Rgb(0x1f, 0x29, 0x37),
            loading: Color::Rgb(0x16, 0xa3, 0x4a),

            warning: Color::Rgb(0xb4, 0x53, 0x09),
            error: Color::Rgb(0xef, 0x44, 0x44),
        }
    }

    /// Night Garden theme
    pub fn night_garden() -> Self {
        Self {
            bg: Color::Rgb(0x0f, 0x1a, 0x14),
            fg: Color::Rgb(0xd1, 0xfa, 0xe5),
            muted: Color::Rgb(0x6e, 0xe7, 0xb7),
            border: Color::Rgb(0x06, 0x5f, 0x46),
            border_focused: Color::Rgb(0x34, 0xd3, 0x99),

            title: Color::Rgb(0xec, 0xfd, 0xf5),
            bar_bg: Color::Rgb(0x06, 0x4e, 0x3b),
            bar_fg: Color::Rgb(0xec, 0xfd, 0xf5),
            active_tab: Color::Rgb(0xfa, 0xcc, 0x15),

            selected_bg: Color::Rgb(0x04, 0x78, 0x57),
            selected_fg: Color::Rgb(0xfe, 0xf0, 0x8a),

            heading: Color::Rgb(0x34, 0xd3, 0x99),
            label: Color::Rgb(0xa7, 0xf3, 0xd0),
            loading: Color::Rgb(0x6e, 0xe7, 0xb7),

            warning: Color::Rgb(0xfb, 0xbf, 0x24),
            error: Color::Rgb(0xf8, 0x71, 0x71),
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn bar_style(&self) -> Style {
        Style::default().fg(self.bar_fg).bg(self.bar_bg)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configured_names() {
        assert_eq!(ThemeKind::from_name("Garden"), ThemeKind::Garden);
        assert_eq!(ThemeKind::from_name("Night Garden"), ThemeKind::NightGarden);
        assert_eq!(ThemeKind::from_name("night-garden"), ThemeKind::NightGarden);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Garden);
    }

    #[test]
    fn names_round_trip() {
        for kind in ThemeKind::all() {
            assert_eq!(ThemeKind::from_name(kind.name()), *kind);
        }
    }
}
