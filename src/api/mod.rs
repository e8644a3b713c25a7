//! TheMealDB client
//!
//! Two read-only endpoints, both keyed by the `i` query parameter:
//! - `filter.php?i=<ingredient>`: recipe summaries using that ingredient
//! - `lookup.php?i=<id>`: the full record for one recipe
//!
//! Both wrap their payload as `{"meals": [...]}` and answer `{"meals": null}`
//! when nothing matches.

mod error;
mod models;

pub use error::ApiError;
pub use models::{RecipeDetail, RecipeId, RecipeSummary};

use crate::config::Config;
use models::{MealsEnvelope, WireDetail, WireSummary};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Public v1 endpoint with the free test key
pub const DEFAULT_API_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Longest error body kept in `ApiError::Status`
const MAX_ERROR_MESSAGE_CHARS: usize = 200;

/// Async client for the two recipe endpoints
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally, so each
/// fetch task gets its own handle.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;
        tracing::debug!(
            "Initialized TheMealDB client: {} (timeout {}s)",
            client.base_url,
            config.timeout_secs
        );
        Ok(client)
    }

    /// Search recipes that use `ingredient`
    ///
    /// No match is `Ok(vec![])`, not an error.
    pub async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, ApiError> {
        let ingredient = ingredient.trim();
        let envelope: MealsEnvelope<WireSummary> = self.get("filter.php", ingredient).await?;
        let recipes: Vec<RecipeSummary> = envelope
            .into_vec()
            .into_iter()
            .map(RecipeSummary::from)
            .collect();

        tracing::info!(
            "Search for {:?} returned {} recipe(s)",
            ingredient,
            recipes.len()
        );
        Ok(recipes)
    }

    /// Fetch the full record for `id`; the first element of the response wins
    pub async fn lookup(&self, id: &RecipeId) -> Result<RecipeDetail, ApiError> {
        let envelope: MealsEnvelope<WireDetail> = self.get("lookup.php", id.as_str()).await?;
        let detail = envelope
            .into_vec()
            .into_iter()
            .next()
            .map(RecipeDetail::from)
            .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;

        tracing::info!("Loaded recipe {} ({})", detail.id, detail.name);
        Ok(detail)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, key: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("GET {}?i={}", url, key);

        let response = self
            .client
            .get(&url)
            .query(&[("i", key)])
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await.map_err(ApiError::from_transport)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// First non-blank line of an error body, at most `MAX_ERROR_MESSAGE_CHARS`
fn error_message(body: &str) -> String {
    let Some(line) = body.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return "Unknown error".to_string();
    };

    if line.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return line.to_string();
    }
    let mut message: String = line.chars().take(MAX_ERROR_MESSAGE_CHARS).collect();
    message.push('…');
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> MealDbClient {
        MealDbClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn search_maps_summaries() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals":[
                    {"strMeal":"Brown Stew Chicken","strMealThumb":"https://img/1.jpg","idMeal":"52940"},
                    {"strMeal":"Chicken Handi","strMealThumb":"https://img/2.jpg","idMeal":"52795"}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let recipes = client_for(&server)
            .search_by_ingredient("  chicken ")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, RecipeId::new("52940"));
        assert_eq!(recipes[1].name, "Chicken Handi");
        assert_eq!(recipes[1].thumbnail_url, "https://img/2.jpg");
    }

    #[tokio::test]
    async fn search_without_matches_is_empty_not_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .create_async()
            .await;

        let recipes = client_for(&server)
            .search_by_ingredient("unobtainium")
            .await
            .unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn ingredient_is_url_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken breast".into()))
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .expect(1)
            .create_async()
            .await;

        client_for(&server)
            .search_by_ingredient("chicken breast")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn lookup_takes_first_record() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52795".into()))
            .with_status(200)
            .with_body(
                r#"{"meals":[{
                    "idMeal":"52795","strMeal":"Chicken Handi","strMealThumb":"https://img/2.jpg",
                    "strCategory":"Chicken","strArea":"Indian","strInstructions":"Cook it.",
                    "strIngredient1":"Chicken","strMeasure1":"1.2 kg"
                }]}"#,
            )
            .create_async()
            .await;

        let detail = client_for(&server)
            .lookup(&RecipeId::new("52795"))
            .await
            .unwrap();
        assert_eq!(detail.name, "Chicken Handi");
        assert_eq!(detail.category.as_deref(), Some("Chicken"));
        assert_eq!(detail.area.as_deref(), Some("Indian"));
        assert_eq!(detail.instructions, "Cook it.");
        assert_eq!(detail.ingredients.len(), 1);
    }

    #[tokio::test]
    async fn lookup_without_record_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .lookup(&RecipeId::new("0"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                id: RecipeId::new("0")
            }
        );
    }

    #[tokio::test]
    async fn server_error_is_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_by_ingredient("beef")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn html_error_page_is_cut_to_one_short_line() {
        let page = format!(
            "\n<html><body>{}</body></html>\n<p>Bad gateway</p>\n",
            "x".repeat(500)
        );
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body(page)
            .create_async()
            .await;

        let err = client_for(&server)
            .search_by_ingredient("beef")
            .await
            .unwrap_err();
        let (status, message) = match err {
            ApiError::Status { status, message } => (status, message),
            other => panic!("expected status error, got {:?}", other),
        };
        assert_eq!(status, 502);
        assert!(message.starts_with("<html><body>xxx"));
        assert!(!message.contains('\n'));
        assert_eq!(message.chars().count(), MAX_ERROR_MESSAGE_CHARS + 1);
        assert!(message.ends_with('…'));
    }

    #[test]
    fn empty_error_body_has_fallback_message() {
        assert_eq!(error_message(""), "Unknown error");
        assert_eq!(error_message("  \n\n"), "Unknown error");
        assert_eq!(error_message("\n  Bad gateway \n"), "Bad gateway");
    }

    #[tokio::test]
    async fn slow_response_is_timeout() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(1500));
                std::io::Write::write_all(w, br#"{"meals":null}"#)
            })
            .create_async()
            .await;

        let client = MealDbClient::new(&server.url(), Duration::from_millis(300)).unwrap();
        let err = client.lookup(&RecipeId::new("52772")).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
        assert_eq!(err.label(), "Timeout");
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_by_ingredient("beef")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Port 1 is reserved (tcpmux) and refuses connections on test machines
        let client = MealDbClient::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
        let err = client.search_by_ingredient("beef").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
