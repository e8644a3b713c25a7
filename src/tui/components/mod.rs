// Components module - reusable UI building blocks
//
// Shell components are rendered on every tab:
// - Title bar: app name plus inline tabs or the ☰ menu button
// - Menu: dropdown overlay listing the tabs
// - Status bar: footer credit and the latest warning
// - Toast: short-lived notification overlay
//
// The rest make up the recipes tab: search box, error banner, result list
// and recipe detail.

pub mod error_banner;
pub mod menu;
pub mod recipe_detail;
pub mod recipe_list;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
