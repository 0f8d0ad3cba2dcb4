use axum::{Json, extract::State};

use crate::{
    AppState,
    api::{
        extract::{AppJson, AppPath},
        types::{
            FavoriteCharacterParams, FavoriteCharacterResponse, FavoritePlanetParams,
            FavoritePlanetResponse, MessageResponse,
        },
    },
    error::Result,
    services::favorite as favorite_service,
};

pub async fn add_favorite_character(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(params): AppJson<FavoriteCharacterParams>,
) -> Result<Json<MessageResponse>> {
    favorite_service::add_favorite_character(&state, user_id, params.id_character).await?;

    Ok(Json(MessageResponse::ok()))
}

pub async fn remove_favorite_character(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(params): AppJson<FavoriteCharacterParams>,
) -> Result<Json<MessageResponse>> {
    favorite_service::remove_favorite_character(&state, user_id, params.id_character).await?;

    Ok(Json(MessageResponse::ok()))
}

pub async fn list_favorite_characters(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<Json<Vec<FavoriteCharacterResponse>>> {
    let favorites = favorite_service::list_favorite_characters(&state, user_id).await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(FavoriteCharacterResponse::from)
            .collect(),
    ))
}

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(params): AppJson<FavoritePlanetParams>,
) -> Result<Json<MessageResponse>> {
    favorite_service::add_favorite_planet(&state, user_id, params.id_planet).await?;

    Ok(Json(MessageResponse::ok()))
}

pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
    AppJson(params): AppJson<FavoritePlanetParams>,
) -> Result<Json<MessageResponse>> {
    favorite_service::remove_favorite_planet(&state, user_id, params.id_planet).await?;

    Ok(Json(MessageResponse::ok()))
}

pub async fn list_favorite_planets(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<Json<Vec<FavoritePlanetResponse>>> {
    let favorites = favorite_service::list_favorite_planets(&state, user_id).await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(FavoritePlanetResponse::from)
            .collect(),
    ))
}
