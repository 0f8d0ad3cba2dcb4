mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, last_id};

/// Expect the created character to round-trip through GET by id
#[tokio::test]
async fn created_character_matches_input() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/people",
            json!({
                "name": "Luke Skywalker",
                "birthday_year": 19,
                "gender": "male",
                "height": 172,
                "skin_color": "fair",
                "eye_color": "blue",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "Añadido un personaje" }));

    let id = last_id(&app.get("/people").await.body);
    let character = app.get(&format!("/people/{id}")).await;

    assert_eq!(character.status, StatusCode::OK);
    assert_eq!(character.body["name"], "Luke Skywalker");
    assert_eq!(character.body["birthday_year"], 19);
    assert_eq!(character.body["gender"], "male");
    assert_eq!(character.body["height"], 172);
    assert_eq!(character.body["skin_color"], "fair");
    assert_eq!(character.body["eye_color"], "blue");
    assert_eq!(character.body["verified"], false);
}

#[tokio::test]
async fn empty_listing_is_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/people").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

/// Expect a structured 404 rather than a server fault for unknown ids
#[tokio::test]
async fn unknown_character_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get("/people/4242").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "not_found");
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/people",
            json!({ "name": "R2-D2", "birthday_year": 33, "gender": "n/a" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "bad_request");
    assert_eq!(app.get("/people").await.body, json!([]));
}

#[tokio::test]
async fn wrong_field_type_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/people",
            json!({
                "name": "C-3PO",
                "birthday_year": "112BBY",
                "gender": "n/a",
                "height": 167,
                "skin_color": "gold",
                "eye_color": "yellow",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.get("/people/vader").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "bad_request");
}

#[tokio::test]
async fn update_overwrites_skin_color_and_verifies() {
    let app = TestApp::spawn().await;
    let id = app.insert_character("Darth Maul").await;

    let response = app
        .put(&format!("/people/{id}"), json!({ "skin_color": "red" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "Personaje modificado" }));

    let character = app.get(&format!("/people/{id}")).await.body;
    assert_eq!(character["skin_color"], "red");
    assert_eq!(character["verified"], true);
    assert_eq!(character["eye_color"], "yellow");
}

#[tokio::test]
async fn update_unknown_character_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.put("/people/7", json!({ "skin_color": "green" })).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

/// Expect GET after DELETE to report the character as gone
#[tokio::test]
async fn deleted_character_is_not_found() {
    let app = TestApp::spawn().await;
    let id = app.insert_character("Qui-Gon Jinn").await;

    let response = app.delete(&format!("/people/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "Personaje borrado" }));

    assert_eq!(
        app.get(&format!("/people/{id}")).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.delete(&format!("/people/{id}")).await.status,
        StatusCode::NOT_FOUND
    );
}
