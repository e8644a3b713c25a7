// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch resolutions)
// - Translating key presses into reducer events
// - Handing the reducer's fetch commands to the dispatcher

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::api::MealDbClient;
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::logging::LogBuffer;
use crate::state::{Event, Lookup, RecipesPanel, Tab};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self as term, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

const HELP: &str =
    "1-4 tabs · m menu · / search · Enter open · Esc back · y copy · x dismiss · q quit";

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(client: MealDbClient, config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel(32);
    let dispatcher = Dispatcher::new(client, tx);
    let mut app = App::with_config(log_buffer, &config);

    let result = run_event_loop(&mut terminal, &mut app, &dispatcher, &mut rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with `tokio::select!`:
/// 1. Keyboard and mouse input
/// 2. A redraw tick (spinner, toast expiry)
/// 3. Fetch resolutions coming back from the dispatcher
///
/// The reducer only ever runs on this task.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    resolutions: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if term::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match term::read() {
                        Ok(term::Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(term::Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(event) = resolutions.recv() => {
                app.send(event);
            }
        }

        for command in app.take_commands() {
            dispatcher.dispatch(command);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Menu → Search box → Global → Recipes tab
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Layer 1: open menu captures all input
    if handle_menu_keys(app, &key_event) {
        return;
    }

    // Layer 2: search box captures text
    if handle_search_input(app, &key_event) {
        return;
    }

    // Layer 3: global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: recipes tab body
    if app.state().tab() == Tab::Recipes {
        handle_recipes_keys(app, &key_event);
    }
}

/// Mouse wheel moves the list cursor or scrolls the detail
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let key = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    handle_key_event(app, KeyEvent::new(key, KeyModifiers::NONE));
    handle_key_event(
        app,
        KeyEvent::new_with_kind(key, KeyModifiers::NONE, KeyEventKind::Release),
    );
}

fn handle_menu_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.state().menu_open() {
        return false;
    }

    let key = key_event.code;
    if !app.handle_key_press(key) {
        return true;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_menu_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu_cursor(1),
        KeyCode::Enter => {
            if let Some(tab) = Tab::from_index(app.menu_cursor) {
                app.send(Event::MenuItemSelected(tab));
            }
        }
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
    true
}

/// Typing goes to the ingredient box while it is focused
fn handle_search_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.search_focused || app.state().tab() != Tab::Recipes {
        return false;
    }

    match key_event.code {
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = app.state().ingredient().to_string();
            text.push(c);
            app.send(Event::IngredientEdited(text));
            true
        }
        KeyCode::Backspace => {
            let mut text = app.state().ingredient().to_string();
            text.pop();
            app.send(Event::IngredientEdited(text));
            true
        }
        KeyCode::Enter => {
            if app.handle_key_press(KeyCode::Enter) && app.send(Event::SearchRequested) {
                app.search_focused = false;
            }
            true
        }
        KeyCode::Esc => {
            if app.handle_key_press(KeyCode::Esc) {
                app.search_focused = false;
            }
            true
        }
        _ => false,
    }
}

/// Keys that work on every tab. Returns true if handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let tab = match key {
        KeyCode::F(n @ 1..=4) => Tab::from_index(n as usize - 1),
        KeyCode::Char(c @ '1'..='4') => Tab::from_index(c as usize - '1' as usize),
        KeyCode::Tab => Some(app.state().tab().next()),
        KeyCode::BackTab => Some(app.state().tab().prev()),
        _ => None,
    };
    if let Some(tab) = tab {
        if app.handle_key_press(key) {
            app.send(Event::TabSelected(tab));
        }
        return true;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('m') => {
            if app.handle_key_press(key) {
                app.toggle_menu();
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.show_toast(HELP);
            }
            true
        }
        KeyCode::Char('x') if app.state().error().is_some() => {
            if app.handle_key_press(key) {
                app.send(Event::ErrorDismissed);
            }
            true
        }
        _ => false,
    }
}

/// What the recipes body is showing, without borrowing the state
#[derive(Clone, Copy, PartialEq, Eq)]
enum Body {
    Idle,
    List,
    Detail,
    LoadingDetail,
    LoadingSearch,
}

impl Body {
    fn of(panel: RecipesPanel<'_>) -> Self {
        match panel {
            RecipesPanel::Prompt | RecipesPanel::NoResults(_) => Body::Idle,
            RecipesPanel::List(_) => Body::List,
            RecipesPanel::Detail(_) => Body::Detail,
            RecipesPanel::Loading(Lookup::Detail { .. }) => Body::LoadingDetail,
            RecipesPanel::Loading(Lookup::Search { .. }) => Body::LoadingSearch,
        }
    }
}

fn handle_recipes_keys(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }

    if key == KeyCode::Char('/') {
        app.search_focused = true;
        return;
    }

    match (Body::of(app.state().recipes_panel()), key) {
        (Body::Idle, KeyCode::Enter) => app.search_focused = true,

        (Body::List, KeyCode::Up | KeyCode::Char('k')) => {
            app.send(Event::CursorMoved(-1));
        }
        (Body::List, KeyCode::Down | KeyCode::Char('j')) => {
            app.send(Event::CursorMoved(1));
        }
        (Body::List, KeyCode::PageUp) => {
            app.send(Event::CursorMoved(-10));
        }
        (Body::List, KeyCode::PageDown) => {
            app.send(Event::CursorMoved(10));
        }
        (Body::List, KeyCode::Enter) => {
            if let Some(id) = app.state().highlighted().map(|r| r.id.clone()) {
                app.send(Event::DetailRequested(id));
            }
        }

        (Body::Detail, KeyCode::Up | KeyCode::Char('k')) => app.scroll_detail(-1),
        (Body::Detail, KeyCode::Down | KeyCode::Char('j')) => app.scroll_detail(1),
        (Body::Detail, KeyCode::PageUp) => app.scroll_detail(-10),
        (Body::Detail, KeyCode::PageDown) => app.scroll_detail(10),
        (Body::Detail, KeyCode::Char('y')) => copy_detail(app),
        (Body::Detail | Body::LoadingDetail, KeyCode::Esc | KeyCode::Backspace) => {
            app.send(Event::DetailDismissed);
        }

        _ => {}
    }
}

fn copy_detail(app: &mut App) {
    let Some(text) = app.state().detail().map(|d| d.to_plain_text()) else {
        return;
    };
    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.show_toast("✓ Recipe copied to clipboard"),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            app.show_toast("✗ Failed to copy");
        }
    }
}
