use axum::{Json, extract::State};

use crate::{
    AppState,
    api::{
        extract::{AppJson, AppPath},
        types::{
            CharacterResponse, CreateCharacterParams, MessageResponse, UpdateCharacterParams,
        },
    },
    error::Result,
    services::character as character_service,
};

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>> {
    let characters = character_service::list_characters(&state).await?;

    Ok(Json(
        characters
            .into_iter()
            .map(CharacterResponse::from)
            .collect(),
    ))
}

pub async fn get_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CharacterResponse>> {
    let character = character_service::get_character(&state, id).await?;

    Ok(Json(character.into()))
}

pub async fn create_character(
    State(state): State<AppState>,
    AppJson(params): AppJson<CreateCharacterParams>,
) -> Result<Json<MessageResponse>> {
    character_service::create_character(&state, params.into()).await?;

    Ok(Json(MessageResponse::new("Añadido un personaje")))
}

pub async fn update_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(params): AppJson<UpdateCharacterParams>,
) -> Result<Json<MessageResponse>> {
    character_service::update_skin_color(&state, id, params.skin_color).await?;

    Ok(Json(MessageResponse::new("Personaje modificado")))
}

pub async fn delete_character(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    character_service::delete_character(&state, id).await?;

    Ok(Json(MessageResponse::new("Personaje borrado")))
}
