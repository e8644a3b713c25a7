// Events consumed by the reducer and commands it emits
//
// Everything that can change `AppState` is an `Event`. Anything the reducer
// needs done outside itself (network fetches) comes back as a `Command`, and
// the command's outcome re-enters the reducer as a `*Resolved` event carrying
// the same token.

use super::Tab;
use crate::api::{ApiError, RecipeDetail, RecipeId, RecipeSummary};
use std::fmt;

/// Sequence number attached to every outbound lookup
///
/// Tokens increase monotonically per `AppState`. Only a resolution carrying
/// the token of the latest request is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub(super) u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything that can happen to the UI state
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Search box text changed (full new value)
    IngredientEdited(String),
    /// User asked to search for the current ingredient text
    SearchRequested,
    SearchResolved {
        token: RequestToken,
        result: Result<Vec<RecipeSummary>, ApiError>,
    },
    /// User picked a summary from the list
    DetailRequested(RecipeId),
    DetailResolved {
        token: RequestToken,
        result: Result<RecipeDetail, ApiError>,
    },
    /// Close the detail and go back to the list
    DetailDismissed,
    /// Tab picked from the inline nav bar
    TabSelected(Tab),
    /// Open/close the collapsible menu
    MenuToggled,
    /// Tab picked from the collapsible menu: switch and close in one step
    MenuItemSelected(Tab),
    /// Move the list cursor by `delta` rows (clamped)
    CursorMoved(isize),
    ErrorDismissed,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SearchRecipes {
        token: RequestToken,
        ingredient: String,
    },
    LookupRecipe {
        token: RequestToken,
        id: RecipeId,
    },
}

impl Command {
    pub fn token(&self) -> RequestToken {
        match self {
            Command::SearchRecipes { token, .. } | Command::LookupRecipe { token, .. } => *token,
        }
    }
}
