//! Recipe records and their TheMealDB wire format
//!
//! The API names every field `strSomething` and uses both `null` and `""` for
//! missing values. Wire structs stay private to this module; the rest of the
//! crate only sees the cleaned-up `RecipeSummary` / `RecipeDetail`.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// TheMealDB exposes up to 20 ingredient/measure pairs per recipe
const MAX_INGREDIENTS: usize = 20;

/// Recipe identifier (`idMeal`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lightweight record shown in the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Free-form quantity, may be empty ("1 tbsp", "to taste", "")
    pub measure: String,
}

/// Full recipe record, fetched after a summary is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
    pub video_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDetail {
    /// Plain-text rendering used by the clipboard copy and `show` command
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n\n", self.name);
        out.push_str(&format!(
            "Category: {}\n",
            self.category.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!("Area: {}\n", self.area.as_deref().unwrap_or("-")));
        if !self.tags.is_empty() {
            out.push_str(&format!("Tags: {}\n", self.tags.join(", ")));
        }

        if !self.ingredients.is_empty() {
            out.push_str("\nIngredients:\n");
            for ingredient in &self.ingredients {
                if ingredient.measure.is_empty() {
                    out.push_str(&format!("  - {}\n", ingredient.name));
                } else {
                    out.push_str(&format!("  - {} {}\n", ingredient.measure, ingredient.name));
                }
            }
        }

        out.push_str(&format!("\nInstructions:\n{}\n", self.instructions));

        if let Some(url) = &self.source_url {
            out.push_str(&format!("\nSource: {}\n", url));
        }
        if let Some(url) = &self.video_url {
            out.push_str(&format!("Video: {}\n", url));
        }
        out
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// `{"meals": [...]}` or `{"meals": null}`
#[derive(Debug, Deserialize)]
pub(super) struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub(super) fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct WireSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumb: Option<String>,
}

impl From<WireSummary> for RecipeSummary {
    fn from(wire: WireSummary) -> Self {
        Self {
            id: RecipeId(wire.id),
            name: wire.name,
            thumbnail_url: wire.thumb.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct WireDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumb: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    /// strIngredient1..20 / strMeasure1..20 and anything else the API adds
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<WireDetail> for RecipeDetail {
    fn from(wire: WireDetail) -> Self {
        let ingredients = (1..=MAX_INGREDIENTS)
            .filter_map(|n| {
                let name = text_field(&wire.rest, &format!("strIngredient{}", n))?;
                let measure =
                    text_field(&wire.rest, &format!("strMeasure{}", n)).unwrap_or_default();
                Some(Ingredient { name, measure })
            })
            .collect();

        let tags = wire
            .tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: RecipeId(wire.id),
            name: wire.name,
            thumbnail_url: wire.thumb.unwrap_or_default(),
            category: non_empty(wire.category),
            area: non_empty(wire.area),
            instructions: wire.instructions.unwrap_or_default().trim().to_string(),
            tags,
            source_url: non_empty(wire.source),
            video_url: non_empty(wire.youtube),
            ingredients,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
