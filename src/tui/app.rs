// TUI application state
//
// `App` wraps the pure `AppState` with everything that only matters on a
// terminal: theme, key debounce, search box focus, menu cursor, detail
// scroll, toast and the spinner. All changes to `AppState` go through
// `App::send`, which queues any resulting fetch for the event loop to run.

use super::components::Toast;
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::state::{AppState, Command, Event, Tab};
use crossterm::event::KeyCode;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Main application state for the TUI
pub struct App {
    state: AppState,

    /// Fetches requested by the reducer, drained by the event loop
    outbox: Vec<Command>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Name for the greeting and title bar
    pub user_name: Option<String>,

    /// Log buffer fed by the tracing layer (footer shows the latest warning)
    pub log_buffer: LogBuffer,

    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// Keystrokes go to the ingredient box instead of the shortcuts
    pub search_focused: bool,

    /// Highlighted row of the open menu
    pub menu_cursor: usize,

    /// Line offset into the detail panel
    pub detail_scroll: u16,

    spinner_frame: usize,

    input_handler: InputHandler,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            state: AppState::new(),
            outbox: Vec::new(),
            theme_kind,
            theme: theme_kind.theme(),
            user_name: config.user_name.clone(),
            log_buffer,
            toast: None,
            should_quit: false,
            search_focused: false,
            menu_cursor: 0,
            detail_scroll: 0,
            spinner_frame: 0,
            input_handler: InputHandler::with_default_config(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Feed an event to the reducer. Returns true if a fetch was queued.
    pub fn send(&mut self, event: Event) -> bool {
        if matches!(event, Event::DetailRequested(_) | Event::DetailDismissed) {
            self.detail_scroll = 0;
        }
        if let Event::TabSelected(tab) | Event::MenuItemSelected(tab) = event {
            if tab != Tab::Recipes {
                self.search_focused = false;
            }
        }

        match self.state.update(event) {
            Some(command) => {
                self.outbox.push(command);
                true
            }
            None => false,
        }
    }

    /// Take the queued fetches
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.outbox)
    }

    /// Open or close the menu, starting the cursor on the active tab
    pub fn toggle_menu(&mut self) {
        if !self.state.menu_open() {
            self.menu_cursor = self.state.tab().index();
        }
        self.send(Event::MenuToggled);
    }

    pub fn move_menu_cursor(&mut self, delta: isize) {
        let last = Tab::ALL.len() - 1;
        self.menu_cursor = self.menu_cursor.saturating_add_signed(delta).min(last);
    }

    pub fn scroll_detail(&mut self, delta: i16) {
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
    }

    /// Greeting line for the home tab
    pub fn greeting(&self) -> String {
        match &self.user_name {
            Some(name) => format!("Welcome, {} 👋", name),
            None => "Welcome 👋".to_string(),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn tick_animation(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RecipeId, RecipeSummary};

    fn app() -> App {
        App::with_config(LogBuffer::new(), &Config::default())
    }

    #[test]
    fn search_queues_one_command() {
        let mut app = app();
        app.send(Event::IngredientEdited("chicken".to_string()));
        assert!(app.send(Event::SearchRequested));

        let commands = app.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn detail_request_resets_scroll() {
        let mut app = app();
        app.send(Event::IngredientEdited("beef".to_string()));
        app.send(Event::SearchRequested);
        let token = app.take_commands()[0].token();
        app.send(Event::SearchResolved {
            token,
            result: Ok(vec![RecipeSummary {
                id: RecipeId::new("1"),
                name: "Beef Wellington".to_string(),
                thumbnail_url: String::new(),
            }]),
        });

        app.scroll_detail(7);
        app.send(Event::DetailRequested(RecipeId::new("1")));
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn leaving_recipes_drops_search_focus() {
        let mut app = app();
        app.send(Event::TabSelected(Tab::Recipes));
        app.search_focused = true;

        app.send(Event::TabSelected(Tab::About));
        assert!(!app.search_focused);
    }

    #[test]
    fn menu_opens_on_active_tab() {
        let mut app = app();
        app.send(Event::TabSelected(Tab::About));
        app.toggle_menu();
        assert!(app.state().menu_open());
        assert_eq!(app.menu_cursor, Tab::About.index());

        app.move_menu_cursor(10);
        assert_eq!(app.menu_cursor, Tab::ALL.len() - 1);
        app.move_menu_cursor(-10);
        assert_eq!(app.menu_cursor, 0);
    }

    #[test]
    fn greeting_uses_configured_name() {
        let config = Config {
            user_name: Some("Taylor".to_string()),
            ..Config::default()
        };
        let app = App::with_config(LogBuffer::new(), &config);
        assert_eq!(app.greeting(), "Welcome, Taylor 👋");
        assert_eq!(self::app().greeting(), "Welcome 👋");
    }
}
