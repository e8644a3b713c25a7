/// Responsive breakpoints for layout decisions.
///
/// Width thresholds live here and nowhere else in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: tabs collapse into the ☰ menu button
    Compact,
    /// 60-99 cols: inline tabs
    Normal,
    /// 100+ cols: inline tabs, thumbnail links in the result list
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// Whether the nav tabs collapse into a menu button
    pub fn collapses_nav(self) -> bool {
        self == Breakpoint::Compact
    }
}
