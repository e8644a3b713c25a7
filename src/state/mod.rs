//! Application state and the reducer that drives it
//!
//! `AppState` is the whole UI model: active tab, menu flag, search text,
//! result list, selected detail, in-flight request and error banner. It is
//! only mutated through [`AppState::update`], which never performs I/O. Fetches
//! are returned as [`Command`]s for the caller to run.
//!
//! ```text
//! key press ──▶ Event ──▶ update() ──▶ Option<Command> ──▶ fetch task
//!                  ▲                                           │
//!                  └────────── *Resolved { token, result } ◀───┘
//! ```
//!
//! Overlapping requests are resolved last-request-wins: each request takes a
//! fresh [`RequestToken`] and a resolution is applied only when its token is
//! the one currently pending.

mod event;
mod tab;

pub use event::{Command, Event, RequestToken};
pub use tab::Tab;

use crate::api::{ApiError, RecipeDetail, RecipeId, RecipeSummary};

/// What the outstanding request is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Search { ingredient: String },
    Detail { id: RecipeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    token: RequestToken,
    lookup: Lookup,
}

/// Which body the recipes tab shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipesPanel<'a> {
    /// Nothing searched yet
    Prompt,
    /// A request is in flight
    Loading(&'a Lookup),
    /// Last search matched nothing
    NoResults(&'a str),
    List(&'a [RecipeSummary]),
    Detail(&'a RecipeDetail),
}

/// Complete UI state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    tab: Tab,
    menu_open: bool,
    ingredient: String,
    recipes: Vec<RecipeSummary>,
    /// Ingredient of the last successful search
    last_query: Option<String>,
    cursor: usize,
    detail: Option<RecipeDetail>,
    pending: Option<Pending>,
    last_token: u64,
    error: Option<ApiError>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reducer
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one event. Returns the fetch to run, if any.
    pub fn update(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::IngredientEdited(text) => {
                self.ingredient = text;
                None
            }
            Event::SearchRequested => {
                let ingredient = self.ingredient.trim();
                if ingredient.is_empty() {
                    tracing::debug!("Ignoring search for blank ingredient");
                    return None;
                }
                let ingredient = ingredient.to_string();
                let token = self.begin(Lookup::Search {
                    ingredient: ingredient.clone(),
                });
                tracing::debug!("Search {} for {:?}", token, ingredient);
                Some(Command::SearchRecipes { token, ingredient })
            }
            Event::SearchResolved { token, result } => {
                let Some(Lookup::Search { ingredient }) =
                    self.finish(token, |l| matches!(l, Lookup::Search { .. }))
                else {
                    return None;
                };
                match result {
                    Ok(recipes) => {
                        self.recipes = recipes;
                        self.cursor = 0;
                        self.detail = None;
                        self.last_query = Some(ingredient);
                    }
                    Err(err) => self.fail(err),
                }
                None
            }
            Event::DetailRequested(id) => {
                self.detail = None;
                let token = self.begin(Lookup::Detail { id: id.clone() });
                tracing::debug!("Lookup {} for recipe {}", token, id);
                Some(Command::LookupRecipe { token, id })
            }
            Event::DetailResolved { token, result } => {
                if self
                    .finish(token, |l| matches!(l, Lookup::Detail { .. }))
                    .is_none()
                {
                    return None;
                }
                match result {
                    Ok(detail) => self.detail = Some(detail),
                    Err(err) => self.fail(err),
                }
                None
            }
            Event::DetailDismissed => {
                self.detail = None;
                if matches!(
                    self.pending,
                    Some(Pending {
                        lookup: Lookup::Detail { .. },
                        ..
                    })
                ) {
                    tracing::debug!("Detail dismissed while loading; dropping request");
                    self.pending = None;
                }
                None
            }
            Event::TabSelected(tab) => {
                self.tab = tab;
                None
            }
            Event::MenuToggled => {
                self.menu_open = !self.menu_open;
                None
            }
            Event::MenuItemSelected(tab) => {
                self.tab = tab;
                self.menu_open = false;
                None
            }
            Event::CursorMoved(delta) => {
                let last = self.recipes.len().saturating_sub(1);
                self.cursor = self.cursor.saturating_add_signed(delta).min(last);
                None
            }
            Event::ErrorDismissed => {
                self.error = None;
                None
            }
        }
    }

    /// Start a request: new token, loading on, stale banner cleared
    fn begin(&mut self, lookup: Lookup) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        if let Some(previous) = self.pending.replace(Pending { token, lookup }) {
            tracing::debug!("Request {} superseded by {}", previous.token, token);
        }
        self.error = None;
        token
    }

    /// Finish the pending request if `token` is the one we are waiting for
    /// and it is the expected kind of lookup
    fn finish(&mut self, token: RequestToken, kind: fn(&Lookup) -> bool) -> Option<Lookup> {
        match &self.pending {
            Some(pending) if pending.token == token && kind(&pending.lookup) => {
                self.pending.take().map(|p| p.lookup)
            }
            _ => {
                tracing::debug!("Dropping stale response {}", token);
                None
            }
        }
    }

    fn fail(&mut self, err: ApiError) {
        tracing::warn!("Request failed: {}", err);
        self.error = Some(err);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    /// Ingredient of the last search that completed successfully
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Summary under the list cursor
    pub fn highlighted(&self) -> Option<&RecipeSummary> {
        self.recipes.get(self.cursor)
    }

    pub fn detail(&self) -> Option<&RecipeDetail> {
        self.detail.as_ref()
    }

    /// True strictly between a request and its resolution
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Resolve the recipes tab body
    pub fn recipes_panel(&self) -> RecipesPanel<'_> {
        if let Some(pending) = &self.pending {
            RecipesPanel::Loading(&pending.lookup)
        } else if let Some(detail) = &self.detail {
            RecipesPanel::Detail(detail)
        } else if !self.recipes.is_empty() {
            RecipesPanel::List(&self.recipes)
        } else if let Some(query) = &self.last_query {
            RecipesPanel::NoResults(query)
        } else {
            RecipesPanel::Prompt
        }
    }
}
