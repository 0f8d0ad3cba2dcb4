mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn added_character_favorite_is_listed() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("leia@rebellion.org").await;
    let character_id = app.insert_character("Han Solo").await;

    let response = app
        .post(
            &format!("/user/{user_id}/fav_characters"),
            json!({ "id_character": character_id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "ok" }));

    let favorites = app.get(&format!("/user/{user_id}/fav_characters")).await;
    assert_eq!(favorites.status, StatusCode::OK);
    assert_eq!(favorites.body[0]["user_id"], user_id);
    assert_eq!(favorites.body[0]["character_id"], character_id);
}

/// Expect two distinct rows when the same pair is favorited twice
#[tokio::test]
async fn duplicate_favorites_are_allowed() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("lando@cloudcity.com").await;
    let planet_id = app.insert_planet("Bespin").await;
    let uri = format!("/user/{user_id}/fav_planets");

    for _ in 0..2 {
        let response = app.post(&uri, json!({ "id_planet": planet_id })).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let favorites = app.get(&uri).await.body;
    let rows = favorites.as_array().expect("favorites should be an array");
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0]["id"], rows[1]["id"]);
    assert!(rows.iter().all(|row| row["planet_id"] == planet_id));
}

#[tokio::test]
async fn unknown_target_or_user_is_ko() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("wedge@rogue.squadron").await;
    let character_id = app.insert_character("Biggs").await;

    let unknown_character = app
        .post(
            &format!("/user/{user_id}/fav_characters"),
            json!({ "id_character": character_id + 100 }),
        )
        .await;
    assert_eq!(unknown_character.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_character.body, json!({ "msg": "ko" }));

    let unknown_user = app
        .post(
            &format!("/user/{}/fav_characters", user_id + 100),
            json!({ "id_character": character_id }),
        )
        .await;
    assert_eq!(unknown_user.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.body, json!({ "msg": "ko" }));

    let missing_id = app
        .post(&format!("/user/{user_id}/fav_characters"), json!({}))
        .await;
    assert_eq!(missing_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_id.body, json!({ "msg": "ko" }));
}

#[tokio::test]
async fn remove_deletes_one_row() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("mon@chandrila.gov").await;
    let character_id = app.insert_character("Mothma").await;
    let uri = format!("/user/{user_id}/fav_characters");

    app.post(&uri, json!({ "id_character": character_id })).await;
    app.post(&uri, json!({ "id_character": character_id })).await;

    let response = app
        .delete_with(&uri, json!({ "id_character": character_id }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "ok" }));

    let favorites = app.get(&uri).await.body;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
}

/// Removing a favorite that was never added still reports success
#[tokio::test]
async fn removing_absent_favorite_is_a_noop() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("bail@alderaan.gov").await;
    let planet_id = app.insert_planet("Alderaan").await;
    let other_planet_id = app.insert_planet("Yavin IV").await;
    let uri = format!("/user/{user_id}/fav_planets");

    app.post(&uri, json!({ "id_planet": planet_id })).await;
    let before = app.get(&uri).await.body;

    let response = app
        .delete_with(&uri, json!({ "id_planet": other_planet_id }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "ok" }));

    assert_eq!(app.get(&uri).await.body, before);
}

#[tokio::test]
async fn remove_with_unknown_planet_is_ko() {
    let app = TestApp::spawn().await;
    let user_id = app.insert_user("jyn@scarif.net").await;

    let response = app
        .delete_with(
            &format!("/user/{user_id}/fav_planets"),
            json!({ "id_planet": 404 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({ "msg": "ko" }));
}

#[tokio::test]
async fn listing_for_unknown_user_is_not_found() {
    let app = TestApp::spawn().await;

    let characters = app.get("/user/12/fav_characters").await;
    let planets = app.get("/user/12/fav_planets").await;

    assert_eq!(characters.status, StatusCode::NOT_FOUND);
    assert_eq!(planets.status, StatusCode::NOT_FOUND);
    assert_eq!(planets.body["code"], "not_found");
}

#[tokio::test]
async fn favorites_are_scoped_per_user() {
    let app = TestApp::spawn().await;
    let first_user = app.insert_user("finn@resistance.org").await;
    let second_user = app.insert_user("rey@jakku.net").await;
    let planet_id = app.insert_planet("Jakku").await;

    app.post(
        &format!("/user/{first_user}/fav_planets"),
        json!({ "id_planet": planet_id }),
    )
    .await;

    let second = app.get(&format!("/user/{second_user}/fav_planets")).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body, json!([]));
}
