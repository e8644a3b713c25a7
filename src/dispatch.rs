// Command dispatch - runs reducer commands against TheMealDB
//
// The reducer never touches the network. Each `Command` it emits is run here
// on its own tokio task, and the outcome is sent back to the UI loop as the
// matching `*Resolved` event with the command's token.

use crate::api::MealDbClient;
use crate::state::{Command, Event};
use tokio::sync::mpsc;

/// Spawns fetch tasks and forwards their resolutions to the UI loop
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: MealDbClient,
    tx: mpsc::Sender<Event>,
}

impl Dispatcher {
    pub fn new(client: MealDbClient, tx: mpsc::Sender<Event>) -> Self {
        Self { client, tx }
    }

    /// Run `command` in the background
    ///
    /// Nothing is de-duplicated here. Superseded requests still complete and
    /// their resolutions are dropped by the reducer.
    pub fn dispatch(&self, command: Command) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let token = command.token();
            let event = execute(&client, command).await;
            if tx.send(event).await.is_err() {
                tracing::debug!("UI loop gone; dropping resolution {}", token);
            }
        });
    }
}

/// Run one command to completion and wrap the outcome as an event
pub async fn execute(client: &MealDbClient, command: Command) -> Event {
    match command {
        Command::SearchRecipes { token, ingredient } => Event::SearchResolved {
            token,
            result: client.search_by_ingredient(&ingredient).await,
        },
        Command::LookupRecipe { token, id } => Event::DetailResolved {
            token,
            result: client.lookup(&id).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, RecipesPanel};
    use mockito::Matcher;
    use std::time::Duration;

    const CHICKEN: &str = r#"{"meals":[
        {"strMeal":"Brown Stew Chicken","strMealThumb":"https://img/52940.jpg","idMeal":"52940"},
        {"strMeal":"Chicken & mushroom Hotpot","strMealThumb":"https://img/52846.jpg","idMeal":"52846"},
        {"strMeal":"Chicken Alfredo Primavera","strMealThumb":"https://img/52796.jpg","idMeal":"52796"}
    ]}"#;

    const HOTPOT: &str = r#"{"meals":[{
        "idMeal":"52846",
        "strMeal":"Chicken & mushroom Hotpot",
        "strMealThumb":"https://img/52846.jpg",
        "strCategory":"Chicken",
        "strArea":"British",
        "strInstructions":"Heat oven to 200C.",
        "strTags":null,
        "strYoutube":"",
        "strSource":null,
        "strIngredient1":"Butter",
        "strMeasure1":"50g"
    }]}"#;

    fn client_for(server: &mockito::Server) -> MealDbClient {
        MealDbClient::new(&server.url(), Duration::from_secs(5)).unwrap()
    }

    /// Feed a command through the client and back into the reducer
    async fn run(state: &mut AppState, client: &MealDbClient, command: Option<Command>) {
        let command = command.expect("reducer should emit a command");
        let event = execute(client, command).await;
        assert_eq!(state.update(event), None);
    }

    #[tokio::test]
    async fn chicken_search_detail_and_back() {
        let mut server = mockito::Server::new_async().await;
        let search = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CHICKEN)
            .expect(1)
            .create_async()
            .await;
        let lookup = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52846".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(HOTPOT)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut state = AppState::new();

        state.update(Event::IngredientEdited("chicken".to_string()));
        let command = state.update(Event::SearchRequested);
        run(&mut state, &client, command).await;

        let RecipesPanel::List(rows) = state.recipes_panel() else {
            panic!("expected list, got {:?}", state.recipes_panel());
        };
        assert_eq!(rows.len(), 3);
        let before = rows.to_vec();

        // second row
        state.update(Event::CursorMoved(1));
        let id = state.highlighted().unwrap().id.clone();
        assert_eq!(id.as_str(), "52846");

        let command = state.update(Event::DetailRequested(id));
        assert!(matches!(state.recipes_panel(), RecipesPanel::Loading(_)));
        run(&mut state, &client, command).await;

        let RecipesPanel::Detail(detail) = state.recipes_panel() else {
            panic!("expected detail, got {:?}", state.recipes_panel());
        };
        assert_eq!(detail.name, "Chicken & mushroom Hotpot");
        assert_eq!(detail.category.as_deref(), Some("Chicken"));
        assert_eq!(detail.area.as_deref(), Some("British"));
        assert_eq!(detail.instructions, "Heat oven to 200C.");

        assert_eq!(state.update(Event::DetailDismissed), None);
        assert_eq!(state.recipes_panel(), RecipesPanel::List(&before));

        search.assert_async().await;
        lookup.assert_async().await;
    }

    #[tokio::test]
    async fn blank_search_never_reaches_the_server() {
        let mut server = mockito::Server::new_async().await;
        let search = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let mut state = AppState::new();
        state.update(Event::IngredientEdited("   ".to_string()));
        assert_eq!(state.update(Event::SearchRequested), None);
        assert_eq!(state.recipes_panel(), RecipesPanel::Prompt);

        search.assert_async().await;
    }

    #[tokio::test]
    async fn missing_recipe_keeps_list_and_shows_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(CHICKEN)
            .create_async()
            .await;
        server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals":null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let mut state = AppState::new();
        state.update(Event::IngredientEdited("chicken".to_string()));
        let command = state.update(Event::SearchRequested);
        run(&mut state, &client, command).await;

        let id = state.highlighted().unwrap().id.clone();
        let command = state.update(Event::DetailRequested(id));
        run(&mut state, &client, command).await;

        assert!(matches!(state.recipes_panel(), RecipesPanel::List(rows) if rows.len() == 3));
        assert_eq!(state.error().map(|e| e.label()), Some("Not found"));
    }

    #[tokio::test]
    async fn dispatcher_sends_resolution_over_channel() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken".into()))
            .with_status(200)
            .with_body(CHICKEN)
            .create_async()
            .await;

        let (tx, mut rx) = mpsc::channel(4);
        let dispatcher = Dispatcher::new(client_for(&server), tx);

        let mut state = AppState::new();
        state.update(Event::IngredientEdited("chicken".to_string()));
        let command = state.update(Event::SearchRequested).unwrap();
        let token = command.token();
        dispatcher.dispatch(command);

        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("resolution should arrive")
            .expect("channel open");
        match &event {
            Event::SearchResolved { token: got, result } => {
                assert_eq!(*got, token);
                assert_eq!(result.as_ref().map(|r| r.len()), Ok(3));
            }
            other => panic!("unexpected event {:?}", other),
        }

        state.update(event);
        assert_eq!(state.recipes().len(), 3);
        assert!(!state.is_loading());
    }
}
