// tests/api_tests.rs

use readiness::{config::Config, models::result::ScoringMode, routes, state::AppState, store::SessionStore};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app(scoring_mode: ScoringMode) -> String {
    // 1. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let bind_addr = listener.local_addr().unwrap();

    // 2. Create test configuration and state
    let config = Config {
        session_secret: "test_secret_for_integration_tests".to_string(),
        session_ttl: 600, // 10 minutes for tests
        bind_addr,
        scoring_mode,
        static_dir: "static".to_string(),
        rust_log: "error".to_string(),
    };

    let state = AppState {
        sessions: SessionStore::new(),
        config,
    };

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", bind_addr)
}

/// Opens an API session and returns its bearer token.
async fn create_session(client: &reqwest::Client, address: &str) -> String {
    let response = client
        .post(format!("{}/api/sessions", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["expires_in"], 600);
    body["token"].as_str().expect("token missing").to_string()
}

async fn put_answer(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    section: &str,
    index: usize,
    value: &str,
) -> reqwest::Response {
    client
        .put(format!(
            "{}/api/sections/{}/answers/{}",
            address, section, index
        ))
        .bearer_auth(token)
        .json(&json!({ "value": value }))
        .send()
        .await
        .expect("Failed to execute request")
}

async fn advance(client: &reqwest::Client, address: &str, token: &str, section: &str) -> Value {
    let response = client
        .post(format!("{}/api/sections/{}/advance", address, section))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    response.json().await.unwrap()
}

/// Answers every question of a Likert section with `value`.
async fn complete_likert_section(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    section: &str,
    count: usize,
    value: &str,
) -> Value {
    let mut last = Value::Null;
    for index in 0..count {
        let response = put_answer(client, address, token, section, index, value).await;
        assert_eq!(response.status().as_u16(), 200);
        last = advance(client, address, token, section).await;
    }
    last
}

#[tokio::test]
async fn unknown_path_404() {
    // Arrange
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random/path/that/does/not/exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn api_requires_session_token() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();

    let missing = client
        .get(format!("{}/api/sections/psychological-fit", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status().as_u16(), 401);

    let forged = client
        .get(format!("{}/api/results", address))
        .bearer_auth("not-a-token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(forged.status().as_u16(), 401);
}

#[tokio::test]
async fn new_session_starts_on_first_question() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    let response = client
        .get(format!("{}/api/sections/psychological-fit", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let view: Value = response.json().await.unwrap();
    assert_eq!(view["section"], "psychological-fit");
    assert_eq!(view["question_index"], 0);
    assert_eq!(view["question_count"], 6);
    assert_eq!(view["question"]["id"], 1);
    assert_eq!(view["answer"]["state"], "unanswered");
    assert_eq!(view["can_proceed"], false);
    assert_eq!(view["progress"], 25);

    let results = client
        .get(format!("{}/api/sections/results", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(results.status().as_u16(), 404);
}

#[tokio::test]
async fn unknown_section_is_json_404() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    let requests = [
        client.get(format!("{}/api/sections/bogus", address)),
        client.post(format!("{}/api/sections/bogus/advance", address)),
        client.post(format!("{}/api/sections/bogus/retreat", address)),
        client
            .put(format!("{}/api/sections/bogus/answers/0", address))
            .json(&json!({ "value": "5" })),
        client.get(format!("{}/api/sections/introduction", address)),
    ];

    for request in requests {
        let response = request
            .bearer_auth(&token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 404);

        let body: Value = response.json().await.expect("error body is not JSON");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn invalid_answers_are_rejected() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    // Not an option token at all
    let response = put_answer(&client, &address, &token, "psychological-fit", 0, "DROP TABLE").await;
    assert_eq!(response.status().as_u16(), 400);

    // Well-formed but not an option of this question
    let response = put_answer(&client, &address, &token, "technical-aptitude", 0, "9").await;
    assert_eq!(response.status().as_u16(), 400);

    // Index past the end of the section
    let response = put_answer(&client, &address, &token, "wiscar-analysis", 6, "5").await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn advance_is_blocked_until_answered() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    let blocked = advance(&client, &address, &token, "technical-aptitude").await;
    assert_eq!(blocked["outcome"], "blocked");
    assert_eq!(blocked["route"], "/technical-aptitude");
    assert_eq!(blocked["view"]["question_index"], 0);

    let response = put_answer(&client, &address, &token, "technical-aptitude", 0, "object").await;
    assert_eq!(response.status().as_u16(), 200);
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["answer"]["state"], "answered");
    assert_eq!(view["answer"]["value"], "object");
    assert_eq!(view["can_proceed"], true);

    let moved = advance(&client, &address, &token, "technical-aptitude").await;
    assert_eq!(moved["outcome"], "moved");
    assert_eq!(moved["view"]["question_index"], 1);
    assert_eq!(moved["view"]["progress"], 53);
}

#[tokio::test]
async fn retreat_from_first_question_exits_section() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    let response = client
        .post(format!("{}/api/sections/wiscar-analysis/retreat", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["outcome"], "exit_section");
    assert_eq!(body["route"], "/technical-aptitude");
}

#[tokio::test]
async fn completing_a_section_routes_to_the_next() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    let last = complete_likert_section(&client, &address, &token, "psychological-fit", 6, "4").await;
    assert_eq!(last["outcome"], "completed");
    assert_eq!(last["route"], "/technical-aptitude");
    assert_eq!(last["view"]["question_index"], 5);

    let session: Value = client
        .get(format!("{}/api/sessions/current", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();
    assert_eq!(session["psychological"]["answers"]["0"], "4");
    assert_eq!(session["psychological"]["answers"]["5"], "4");
    assert_eq!(session["technical"]["current_index"], 0);
}

#[tokio::test]
async fn fixed_results_ignore_answers() {
    let address = spawn_app(ScoringMode::Fixed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    complete_likert_section(&client, &address, &token, "psychological-fit", 6, "1").await;

    let summary: Value = client
        .get(format!("{}/api/results", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(summary["scoring_mode"], "fixed");
    assert_eq!(summary["overall_score"], 78);
    assert_eq!(summary["confidence"], 82);
    assert_eq!(summary["recommendation"], "YES");
    assert_eq!(summary["section_scores"]["psychological"], 85);
    assert_eq!(summary["section_scores"]["technical"], 72);
    assert_eq!(summary["section_scores"]["wiscar"], 76);
}

#[tokio::test]
async fn computed_results_follow_answers() {
    let address = spawn_app(ScoringMode::Computed).await;
    let client = reqwest::Client::new();
    let token = create_session(&client, &address).await;

    complete_likert_section(&client, &address, &token, "psychological-fit", 6, "5").await;
    complete_likert_section(&client, &address, &token, "wiscar-analysis", 6, "5").await;

    let summary: Value = client
        .get(format!("{}/api/results", address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    // Technical section left blank: (100 + 0 + 100) / 3
    assert_eq!(summary["scoring_mode"], "computed");
    assert_eq!(summary["section_scores"]["psychological"], 100);
    assert_eq!(summary["section_scores"]["technical"], 0);
    assert_eq!(summary["section_scores"]["wiscar"], 100);
    assert_eq!(summary["overall_score"], 67);
    assert_eq!(summary["recommendation"], "MAYBE");
    assert_eq!(summary["confidence"], 60);
}
