use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::db::{
        entities::{favorite_character, favorite_planet},
        repositories::{CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository},
    },
};

pub async fn add_favorite_character(
    state: &AppState,
    user_id: i32,
    character_id: Option<i32>,
) -> Result<favorite_character::Model> {
    let character_id = character_id.ok_or(AppError::FavoriteRejected)?;

    let db_transaction = state.db.begin_transaction().await?;

    let character = CharacterRepository::find_character_by_id(&db_transaction, character_id).await?;
    let user = UserRepository::find_user_by_id(&db_transaction, user_id).await?;

    let (Some(user), Some(character)) = (user, character) else {
        db_transaction.rollback().await?;
        return Err(AppError::FavoriteRejected);
    };

    let favorite =
        FavoriteRepository::add_favorite_character(&db_transaction, user.id, character.id).await?;

    db_transaction.commit().await?;
    tracing::info!(user_id, character_id, favorite_id = favorite.id, "Favorite character added");

    Ok(favorite)
}

/// Removes the oldest matching favorite. Returns `false` when the pair was never favorited,
/// which callers still treat as success.
pub async fn remove_favorite_character(
    state: &AppState,
    user_id: i32,
    character_id: Option<i32>,
) -> Result<bool> {
    let character_id = character_id.ok_or(AppError::FavoriteRejected)?;

    let db_transaction = state.db.begin_transaction().await?;

    let character = CharacterRepository::find_character_by_id(&db_transaction, character_id).await?;
    let user = UserRepository::find_user_by_id(&db_transaction, user_id).await?;

    let (Some(user), Some(character)) = (user, character) else {
        db_transaction.rollback().await?;
        return Err(AppError::FavoriteRejected);
    };

    let Some(favorite) =
        FavoriteRepository::find_favorite_character(&db_transaction, user.id, character.id).await?
    else {
        db_transaction.rollback().await?;
        tracing::debug!(user_id, character_id, "No favorite character to remove");
        return Ok(false);
    };

    FavoriteRepository::delete_favorite_character(&db_transaction, favorite.id).await?;

    db_transaction.commit().await?;
    tracing::info!(user_id, character_id, favorite_id = favorite.id, "Favorite character removed");

    Ok(true)
}

pub async fn list_favorite_characters(
    state: &AppState,
    user_id: i32,
) -> Result<Vec<favorite_character::Model>> {
    let db_connection = state.db.get_connection();

    if UserRepository::find_user_by_id(db_connection, user_id)
        .await?
        .is_none()
    {
        return Err(AppError::UserNotFound);
    }

    FavoriteRepository::list_favorite_characters_by_user(db_connection, user_id).await
}

pub async fn add_favorite_planet(
    state: &AppState,
    user_id: i32,
    planet_id: Option<i32>,
) -> Result<favorite_planet::Model> {
    let planet_id = planet_id.ok_or(AppError::FavoriteRejected)?;

    let db_transaction = state.db.begin_transaction().await?;

    let planet = PlanetRepository::find_planet_by_id(&db_transaction, planet_id).await?;
    let user = UserRepository::find_user_by_id(&db_transaction, user_id).await?;

    let (Some(user), Some(planet)) = (user, planet) else {
        db_transaction.rollback().await?;
        return Err(AppError::FavoriteRejected);
    };

    let favorite =
        FavoriteRepository::add_favorite_planet(&db_transaction, user.id, planet.id).await?;

    db_transaction.commit().await?;
    tracing::info!(user_id, planet_id, favorite_id = favorite.id, "Favorite planet added");

    Ok(favorite)
}

pub async fn remove_favorite_planet(
    state: &AppState,
    user_id: i32,
    planet_id: Option<i32>,
) -> Result<bool> {
    let planet_id = planet_id.ok_or(AppError::FavoriteRejected)?;

    let db_transaction = state.db.begin_transaction().await?;

    let planet = PlanetRepository::find_planet_by_id(&db_transaction, planet_id).await?;
    let user = UserRepository::find_user_by_id(&db_transaction, user_id).await?;

    let (Some(user), Some(planet)) = (user, planet) else {
        db_transaction.rollback().await?;
        return Err(AppError::FavoriteRejected);
    };

    let Some(favorite) =
        FavoriteRepository::find_favorite_planet(&db_transaction, user.id, planet.id).await?
    else {
        db_transaction.rollback().await?;
        tracing::debug!(user_id, planet_id, "No favorite planet to remove");
        return Ok(false);
    };

    FavoriteRepository::delete_favorite_planet(&db_transaction, favorite.id).await?;

    db_transaction.commit().await?;
    tracing::info!(user_id, planet_id, favorite_id = favorite.id, "Favorite planet removed");

    Ok(true)
}

pub async fn list_favorite_planets(
    state: &AppState,
    user_id: i32,
) -> Result<Vec<favorite_planet::Model>> {
    let db_connection = state.db.get_connection();

    if UserRepository::find_user_by_id(db_connection, user_id)
        .await?
        .is_none()
    {
        return Err(AppError::UserNotFound);
    }

    FavoriteRepository::list_favorite_planets_by_user(db_connection, user_id).await
}
