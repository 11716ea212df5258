use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use mockall::mock;
use serde_json::{json, Value};

use stream_planner_api::{
    error::{AppError, AppResult},
    models::{Datasets, GameRecord, OfferRecord, PackageRecord},
    routes::{create_router, AppState},
    services::{loaders::DatasetLoader, RankingConfig},
};

mock! {
    pub Loader {}

    #[async_trait]
    impl DatasetLoader for Loader {
        async fn load(&self) -> AppResult<Datasets>;
        fn source(&self) -> String;
    }
}

fn game(id: u32, home: &str, away: &str) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        team_home: home.to_string(),
        team_away: away.to_string(),
    }
}

fn package(id: u32, name: &str, monthly_cents: &str, yearly_cents: &str) -> PackageRecord {
    PackageRecord {
        id: id.to_string(),
        name: name.to_string(),
        monthly_price_cents: monthly_cents.to_string(),
        monthly_price_yearly_subscription_in_cents: yearly_cents.to_string(),
    }
}

fn offer(game_id: u32, package_id: u32, live: &str, highlights: &str) -> OfferRecord {
    OfferRecord {
        game_id: game_id.to_string(),
        streaming_package_id: package_id.to_string(),
        live: live.to_string(),
        highlights: highlights.to_string(),
    }
}

/// Bayern plays games 1-4; Sky carries 1-2 live, DAZN carries 3-4 on demand,
/// and MagentaTV carries game 1 but costs more than Sky.
fn league() -> Datasets {
    Datasets {
        games: vec![
            game(1, "Bayern München", "Borussia Dortmund"),
            game(2, "RB Leipzig", "Bayern München"),
            game(3, "Bayern München", "Real Madrid"),
            game(4, "Ajax", "Bayern München"),
            game(5, "Real Madrid", "Ajax"),
        ],
        packages: vec![
            package(1, "Sky", "2999", "2500"),
            package(2, "DAZN", "2499", "1950"),
            package(3, "MagentaTV", "4000", "3500"),
        ],
        offers: vec![
            offer(1, 1, "1", "0"),
            offer(2, 1, "1", "1"),
            offer(3, 2, "0", "1"),
            offer(4, 2, "0", "1"),
            offer(1, 3, "1", "1"),
            offer(5, 3, "1", "0"),
        ],
    }
}

fn loader_with(datasets: Vec<Datasets>) -> MockLoader {
    let mut loader = MockLoader::new();
    let mut remaining = datasets.into_iter();
    loader.expect_load().returning(move || {
        remaining
            .next()
            .ok_or_else(|| AppError::ExternalApi("offline".into()))
    });
    loader.expect_source().return_const("memory".to_string());
    loader
}

async fn create_test_server_with(datasets: Vec<Datasets>) -> TestServer {
    let loader = Arc::new(loader_with(datasets));
    let state = AppState::load(loader, RankingConfig::default())
        .await
        .unwrap();
    let app = create_router(Arc::new(state));
    TestServer::new(app).unwrap()
}

async fn create_test_server() -> TestServer {
    create_test_server_with(vec![league()]).await
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_rankings_for_one_team() {
    let server = create_test_server().await;

    let response = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": [{ "name": "Bayern München" }] }))
        .await;

    response.assert_status_ok();
    let result: Value = response.json();

    assert_eq!(result["totalGames"], 4);

    let packages = result["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 3);
    // Sky and DAZN both cover half; DAZN is cheaper on the yearly plan
    assert_eq!(packages[0]["name"], "DAZN");
    assert_eq!(packages[0]["coverage"], 50.0);
    assert_eq!(packages[0]["onDemandGames"], 2);
    assert_eq!(packages[0]["liveGames"], 0);
    assert_eq!(packages[1]["name"], "Sky");
    assert_eq!(packages[1]["liveGames"], 2);
    assert_eq!(packages[2]["name"], "MagentaTV");
    assert_eq!(packages[2]["coverage"], 25.0);

    let combinations = result["combinations"].as_array().unwrap();
    assert_eq!(combinations.len(), 3);
    let best = &combinations[0];
    assert_eq!(best["coverage"], 100.0);
    assert_eq!(best["coveredGames"], 4);
    assert_eq!(best["packages"].as_array().unwrap().len(), 2);
    assert_eq!(best["totalPrice"], 44.5);
}

#[tokio::test]
async fn test_rankings_with_empty_selection() {
    let server = create_test_server().await;

    let response = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": [] }))
        .await;

    response.assert_status_ok();
    let result: Value = response.json();

    assert_eq!(result["totalGames"], 0);
    assert!(result["combinations"].as_array().unwrap().is_empty());
    assert!(result["packages"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["coverage"] == 0.0));
}

#[tokio::test]
async fn test_rankings_are_repeatable() {
    let server = create_test_server().await;
    let body = json!({ "teams": [{ "name": "Real Madrid" }, { "name": "Ajax" }] });

    let first: Value = server.post("/api/v1/rankings").json(&body).await.json();
    let second: Value = server.post("/api/v1/rankings").json(&body).await.json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_team_without_name_matches_nothing() {
    let mut data = league();
    data.games.push(game(6, "", "Ajax"));
    let server = create_test_server_with(vec![data]).await;

    let response = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": [{ "league": "Bundesliga" }] }))
        .await;

    response.assert_status_ok();
    let result: Value = response.json();
    assert_eq!(result["totalGames"], 0);
}

#[tokio::test]
async fn test_replaced_game_leaves_former_teams() {
    let mut data = league();
    // game 5 is re-issued as a Celtic home game
    data.games.push(game(5, "Celtic", "Ajax"));
    let server = create_test_server_with(vec![data]).await;

    let rankings: Value = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": [{ "name": "Real Madrid" }] }))
        .await
        .json();
    assert_eq!(rankings["totalGames"], 1);

    let matches: Vec<Value> = server
        .post("/api/v1/schedule")
        .json(&json!({ "teams": [{ "name": "Real Madrid" }] }))
        .await
        .json();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["gameId"], 3);
}

#[tokio::test]
async fn test_rankings_rejects_malformed_body() {
    let server = create_test_server().await;

    let response = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": "Bayern München" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_schedule() {
    let server = create_test_server().await;

    let response = server
        .post("/api/v1/schedule")
        .json(&json!({ "teams": [{ "name": "Ajax" }] }))
        .await;

    response.assert_status_ok();
    let matches: Vec<Value> = response.json();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["gameId"], 4);
    assert_eq!(matches[0]["availableOn"][0]["packageName"], "DAZN");
    assert_eq!(matches[0]["availableOn"][0]["highlights"], true);
    assert_eq!(matches[1]["gameId"], 5);
    assert_eq!(matches[1]["availableOn"][0]["packageName"], "MagentaTV");
}

#[tokio::test]
async fn test_team_search() {
    let server = create_test_server().await;

    let response = server.get("/api/v1/teams").add_query_param("q", "real").await;

    response.assert_status_ok();
    let teams: Vec<Value> = response.json();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Real Madrid");
    assert_eq!(teams[0]["gameCount"], 2);
}

#[tokio::test]
async fn test_team_search_rejects_zero_limit() {
    let server = create_test_server().await;

    let response = server.get("/api/v1/teams").add_query_param("limit", 0).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dataset_summary() {
    let server = create_test_server().await;

    let response = server.get("/api/v1/datasets").await;

    response.assert_status_ok();
    let summary: Value = response.json();
    assert_eq!(summary["source"], "memory");
    assert_eq!(summary["games"], 5);
    assert_eq!(summary["packages"], 3);
    assert_eq!(summary["offers"], 6);
    assert_eq!(summary["malformedFields"], 0);
}

#[tokio::test]
async fn test_reload_replaces_datasets() {
    let mut updated = league();
    updated.packages.push(package(4, "Free Stream", "0", "0"));
    updated.offers.push(offer(3, 4, "1", "0"));

    let server = create_test_server_with(vec![league(), updated]).await;

    let response = server.post("/api/v1/datasets/reload").await;
    response.assert_status_ok();
    let summary: Value = response.json();
    assert_eq!(summary["packages"], 4);

    let result: Value = server
        .post("/api/v1/rankings")
        .json(&json!({ "teams": [{ "name": "Real Madrid" }] }))
        .await
        .json();
    let free = result["packages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Free Stream")
        .unwrap()
        .clone();
    assert_eq!(free["gamesPerEuro"], 1.0);
}

#[tokio::test]
async fn test_failed_reload_is_bad_gateway() {
    let server = create_test_server().await;

    let response = server.post("/api/v1/datasets/reload").await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    // the first snapshot keeps serving
    let summary: Value = server.get("/api/v1/datasets").await.json();
    assert_eq!(summary["packages"], 3);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server().await;

    let response = server.get("/health").await;

    assert!(response.headers().contains_key("x-request-id"));
}
