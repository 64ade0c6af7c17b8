use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::FutureExt;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use warp::http::StatusCode;

use gameimpact::catalog::StaticCatalog;
use gameimpact::environment::{Config, Environment};
use gameimpact::routes::{self, admin};

static ENVIRONMENT: Lazy<Environment> = Lazy::new(|| make_environment(Config::default()));

fn make_environment(config: Config) -> Environment {
    Environment::new(
        Arc::new(log::discard()),
        Arc::new(StaticCatalog::sample()),
        config,
    )
}

async fn get(environment: &Environment, path: &str) -> (StatusCode, Value) {
    let filter = routes::make_main_routes(environment.clone());

    let response = warp::test::request()
        .method("GET")
        .path(path)
        .reply(&filter)
        .await;

    let body = serde_json::from_slice(response.body()).expect("parse response as JSON");

    (response.status(), body)
}

fn ids(body: &Value) -> Vec<&str> {
    body["games"]
        .as_array()
        .expect("games must be an array")
        .iter()
        .map(|g| g["id"].as_str().expect("game must have an ID"))
        .collect()
}

#[tokio::test]
async fn search_without_filters_lists_everything() {
    let (status, body) = get(&ENVIRONMENT, "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ids(&body),
        vec!["game1", "game2", "game3", "game4", "game5", "game6"]
    );
    assert_eq!(body["total"], 6);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["query"], "");
    assert_eq!(body["previous"], Value::Null);
    assert_eq!(body["next"], Value::Null);
    assert_eq!(
        body["pages"],
        json!([{ "kind": "page", "number": 1, "current": true }])
    );
}

#[tokio::test]
async fn successful_responses_are_timed() {
    let filter = routes::make_main_routes(ENVIRONMENT.clone());

    let response = warp::test::request().path("/featured").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);
    let timing = response
        .headers()
        .get("server-timing")
        .expect("server-timing header must be set");
    assert!(timing.to_str().unwrap().starts_with("handler;dur="));
}

#[tokio::test]
async fn search_filters_by_rating() {
    let (status, body) = get(&ENVIRONMENT, "/search?rating=E10%2B").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["game2"]);
    assert_eq!(body["query"], "rating=E10%2B");

    let (_, body) = get(&ENVIRONMENT, "/search?rating=E10+").await;
    assert_eq!(ids(&body), vec!["game2"]);

    let (_, body) = get(&ENVIRONMENT, "/search?rating=all").await;
    assert_eq!(body["total"], 6);
}

#[tokio::test]
async fn search_matches_term_against_titles() {
    let (_, body) = get(&ENVIRONMENT, "/search?q=%20MATH%20").await;
    assert_eq!(ids(&body), vec!["game1"]);

    let (_, body) = get(&ENVIRONMENT, "/search?q=masters").await;
    assert_eq!(ids(&body), vec!["game6"]);

    let (_, body) = get(&ENVIRONMENT, "/search?q=zelda").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["total_pages"], 0);
    assert_eq!(body["pages"], json!([]));
}

#[tokio::test]
async fn search_combines_genres_and_tags() {
    let (_, body) = get(&ENVIRONMENT, "/search?genre=Educational").await;
    assert_eq!(ids(&body), vec!["game1", "game3"]);

    let (_, body) = get(&ENVIRONMENT, "/search?category=educational").await;
    assert_eq!(ids(&body), vec!["game1", "game3"]);

    let (_, body) = get(&ENVIRONMENT, "/search?genre=Educational&genre=Puzzle").await;
    assert_eq!(ids(&body), vec!["game1", "game2", "game3"]);

    let (_, body) = get(&ENVIRONMENT, "/search?tag=learning&tag=coding").await;
    assert_eq!(ids(&body), vec!["game3"]);

    let (_, body) = get(&ENVIRONMENT, "/search?genre=Educational&rating=T").await;
    assert_eq!(ids(&body), vec!["game3"]);
}

#[tokio::test]
async fn search_pages_through_results() {
    let environment = make_environment(Config::new(2));

    let (status, body) = get(&environment, "/search?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["game3", "game4"]);
    assert_eq!(body["page"], 2);
    assert_eq!(body["page_size"], 2);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["previous"], "/search");
    assert_eq!(body["next"], "/search?page=3");

    let (_, body) = get(&environment, "/search?genre=Educational&genre=Puzzle").await;
    assert_eq!(ids(&body), vec!["game1", "game2"]);
    assert_eq!(body["next"], "/search?genre=Educational&genre=Puzzle&page=2");
}

#[tokio::test]
async fn search_past_the_last_page_is_empty() {
    let (status, body) = get(&ENVIRONMENT, "/search?page=9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"], json!([]));
    assert_eq!(body["total"], 6);
    assert_eq!(body["previous"], Value::Null);
    assert_eq!(body["next"], Value::Null);
}

#[tokio::test]
async fn malformed_queries_are_rejected() {
    let (status, body) = get(&ENVIRONMENT, "/search?rating=Z").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "query": "rating=Z",
            "message": "Invalid value \"Z\" for query parameter \"rating\"",
        })
    );

    let (status, body) = get(&ENVIRONMENT, "/search?page=two").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["link"], Value::Null);
}

#[tokio::test]
async fn featured_games_are_the_first_three() {
    let (status, body) = get(&ENVIRONMENT, "/featured").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["game1", "game2", "game3"]);
    assert_eq!(body["games"][1]["age_rating"], "E10+");
    assert_eq!(body["games"][1]["genre"], "Puzzle");
}

#[tokio::test]
async fn game_details_include_guidance() {
    let (status, body) = get(&ENVIRONMENT, "/games/chronicles-of-valor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Chronicles of Valor");
    assert_eq!(body["age_rating"], "M");
    assert_eq!(body["mature"], true);
    assert_eq!(body["screenshots"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["impact"][0]["items"][0]["level"], "high_concern");
    assert!(body["parental_guidance"][0]
        .as_str()
        .unwrap()
        .starts_with("This game provides an opportunity"));

    let (_, body) = get(&ENVIRONMENT, "/games/math-blasters").await;

    assert_eq!(body["mature"], false);
    assert_eq!(
        body["parental_guidance"],
        json!([gameimpact::game::GENERAL_GUIDANCE])
    );
}

#[tokio::test]
async fn unknown_game_links_back_to_search() {
    let (status, body) = get(&ENVIRONMENT, "/games/game1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "id": "game1", "message": "Game not found", "link": "/search" })
    );
}

#[tokio::test]
async fn guides_list_previews_and_faqs() {
    let (status, body) = get(&ENVIRONMENT, "/guides").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guides"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["faqs"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["guides"][0]["link"], "/guides/understanding-ratings");
    assert!(body["guides"][0]["preview"]
        .as_str()
        .unwrap()
        .ends_with("..."));
    assert!(body["guides"][0].get("content").is_none());

    let (status, body) = get(&ENVIRONMENT, "/guides/positive-impacts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "The Positive Impacts of Gaming");
    assert!(body["content"].as_str().unwrap().starts_with("Explores"));

    let (status, body) = get(&ENVIRONMENT, "/faqs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["faqs"][1]["id"], "faq2");
}

#[tokio::test]
async fn unknown_guide_links_back_to_guides() {
    let (status, body) = get(&ENVIRONMENT, "/guides/talking-to-kids").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Guide not found");
    assert_eq!(body["link"], "/guides");
}

#[tokio::test]
async fn unknown_paths_link_home() {
    let (status, body) = get(&ENVIRONMENT, "/about/careers").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "path": "/about/careers", "message": "Page not found", "link": "/" })
    );

    let (status, body) = get(&ENVIRONMENT, "/games").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/games");
    assert_eq!(body["link"], "/");
}

#[tokio::test]
async fn route_errors_win_over_the_catch_all() {
    let (status, body) = get(&ENVIRONMENT, "/games/unknown-game").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Game not found");
    assert_eq!(body["link"], "/search");

    let (status, body) = get(&ENVIRONMENT, "/guides/unknown-guide").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["link"], "/guides");

    let (status, body) = get(&ENVIRONMENT, "/search?rating=Z&page=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["query"], "rating=Z&page=2");
    assert!(body.get("path").is_none());
}

#[tokio::test]
async fn healthz_reports_version() {
    let filter = admin::make_healthz_route(ENVIRONMENT.clone());

    let response = warp::test::request().path("/healthz").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(response.body()).expect("parse response as JSON");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn terminate_triggers_shutdown() {
    let terminated = Arc::new(AtomicBool::new(false));

    let terminate = {
        let terminated = terminated.clone();

        Arc::new(move || {
            let terminated = terminated.clone();

            async move {
                terminated.store(true, Ordering::SeqCst);
            }
            .boxed()
        })
    };

    let filter = admin::make_termination_route(ENVIRONMENT.clone(), terminate);

    let response = warp::test::request()
        .method("GET")
        .path("/terminate")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(!terminated.load(Ordering::SeqCst));

    let response = warp::test::request()
        .method("POST")
        .path("/terminate")
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(terminated.load(Ordering::SeqCst));
}
