//! Integration tests for instruments and watchlists

mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn register(app: &common::TestApp) -> String {
    let body = json!({
        "email": format!("watcher_{}@example.com", uuid::Uuid::new_v4()),
        "password": "password123",
        "displayName": "Watcher"
    });
    let (status, response) = app.post("/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    response["token"].as_str().unwrap().to_string()
}

async fn seed_instrument(app: &common::TestApp, symbol: &str) -> uuid::Uuid {
    sqlx::query_scalar(
        "INSERT INTO instruments (symbol, name, instrument_type, currency) \
         VALUES ($1, $2, 'STOCK', 'USD') \
         ON CONFLICT (symbol) DO UPDATE SET name = EXCLUDED.name \
         RETURNING id",
    )
    .bind(symbol)
    .bind(format!("{} Test Corp.", symbol))
    .fetch_one(&app.pool)
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_instrument_search_matches_symbol_case_insensitively() {
    let app = common::TestApp::new().await;
    seed_instrument(&app, "ZSRCH").await;

    let (status, response) = app.get("/instruments?search=zsrch").await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let instruments = response["instruments"].as_array().unwrap();
    assert!(instruments
        .iter()
        .any(|instrument| instrument["symbol"] == "ZSRCH"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_watchlists_require_authentication() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/watchlists").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_watchlist_crud_flow() {
    let app = common::TestApp::new().await;
    let token = register(&app).await;
    let instrument_id = seed_instrument(&app, "ZCRUD").await;

    // Create
    let (status, response) = app
        .post_authed("/watchlists", &json!({"name": "Tech"}).to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let watchlist_id = response["watchlist"]["id"].as_str().unwrap().to_string();

    // Add an instrument
    let add_body = json!({ "instrumentId": instrument_id });
    let (status, response) = app
        .post_authed(
            &format!("/watchlists/{}/instruments", watchlist_id),
            &add_body.to_string(),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["item"]["positionInList"], 0);

    // Detail includes the instrument in order
    let (status, response) = app
        .get_authed(&format!("/watchlists/{}", watchlist_id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let items = response["watchlist"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["instrument"]["symbol"], "ZCRUD");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_blank_watchlist_name_rejected() {
    let app = common::TestApp::new().await;
    let token = register(&app).await;

    let (status, response) = app
        .post_authed("/watchlists", &json!({"name": "   "}).to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["field"], "name");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_removing_instrument_is_idempotent() {
    let app = common::TestApp::new().await;
    let token = register(&app).await;
    let instrument_id = seed_instrument(&app, "ZIDEM").await;

    let (status, response) = app
        .post_authed("/watchlists", &json!({"name": "Idem"}).to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let watchlist_id = response["watchlist"]["id"].as_str().unwrap().to_string();

    let add_body = json!({ "instrumentId": instrument_id }).to_string();
    let (status, _) = app
        .post_authed(
            &format!("/watchlists/{}/instruments", watchlist_id),
            &add_body,
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let item_path = format!("/watchlists/{}/instruments/{}", watchlist_id, instrument_id);

    let (status, _) = app.delete_authed(&item_path, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Already gone; removal still succeeds
    let (status, _) = app.delete_authed(&item_path, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // An instrument that was never added behaves the same way
    let absent_id = seed_instrument(&app, "ZNVRA").await;
    let (status, _) = app
        .delete_authed(
            &format!("/watchlists/{}/instruments/{}", watchlist_id, absent_id),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_watchlist_of_another_user_is_not_found() {
    let app = common::TestApp::new().await;
    let owner_token = register(&app).await;
    let other_token = register(&app).await;

    let (status, response) = app
        .post_authed(
            "/watchlists",
            &json!({"name": "Private"}).to_string(),
            &owner_token,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let watchlist_id = response["watchlist"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .get_authed(&format!("/watchlists/{}", watchlist_id), &other_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_adding_same_instrument_twice_conflicts() {
    let app = common::TestApp::new().await;
    let token = register(&app).await;
    let instrument_id = seed_instrument(&app, "ZDUP").await;

    let (status, response) = app
        .post_authed("/watchlists", &json!({"name": "Dups"}).to_string(), &token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let watchlist_id = response["watchlist"]["id"].as_str().unwrap().to_string();

    let add_body = json!({ "instrumentId": instrument_id }).to_string();
    let path = format!("/watchlists/{}/instruments", watchlist_id);

    let (status, _) = app.post_authed(&path, &add_body, &token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.post_authed(&path, &add_body, &token).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
