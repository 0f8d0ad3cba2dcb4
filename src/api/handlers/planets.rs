use axum::{Json, extract::State};

use crate::{
    AppState,
    api::{
        extract::{AppJson, AppPath},
        types::{CreatePlanetParams, MessageResponse, PlanetResponse, UpdatePlanetParams},
    },
    error::Result,
    services::planet as planet_service,
};

pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<PlanetResponse>>> {
    let planets = planet_service::list_planets(&state).await?;

    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

pub async fn get_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PlanetResponse>> {
    let planet = planet_service::get_planet(&state, id).await?;

    Ok(Json(planet.into()))
}

pub async fn create_planet(
    State(state): State<AppState>,
    AppJson(params): AppJson<CreatePlanetParams>,
) -> Result<Json<MessageResponse>> {
    planet_service::create_planet(&state, params.into()).await?;

    Ok(Json(MessageResponse::new("Añadido un planet")))
}

pub async fn update_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(params): AppJson<UpdatePlanetParams>,
) -> Result<Json<MessageResponse>> {
    planet_service::update_diameter(&state, id, params.diameter).await?;

    Ok(Json(MessageResponse::new("Planet modificado")))
}

pub async fn delete_planet(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    planet_service::delete_planet(&state, id).await?;

    Ok(Json(MessageResponse::new("Planet borrado")))
}
