use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::db::{
        entities::character,
        repositories::{CharacterRepository, NewCharacter},
    },
};

pub async fn list_characters(state: &AppState) -> Result<Vec<character::Model>> {
    CharacterRepository::list_characters(state.db.get_connection()).await
}

pub async fn get_character(state: &AppState, id: i32) -> Result<character::Model> {
    CharacterRepository::find_character_by_id(state.db.get_connection(), id)
        .await?
        .ok_or(AppError::CharacterNotFound)
}

pub async fn create_character(
    state: &AppState,
    new_character: NewCharacter,
) -> Result<character::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let character = CharacterRepository::create_character(&db_transaction, new_character).await?;

    db_transaction.commit().await?;
    tracing::info!(character_id = character.id, "Character created");

    Ok(character)
}

pub async fn update_skin_color(
    state: &AppState,
    id: i32,
    skin_color: String,
) -> Result<character::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let Some(character) = CharacterRepository::find_character_by_id(&db_transaction, id).await?
    else {
        db_transaction.rollback().await?;
        return Err(AppError::CharacterNotFound);
    };

    let character =
        CharacterRepository::update_skin_color(&db_transaction, character, skin_color).await?;

    db_transaction.commit().await?;
    tracing::info!(character_id = id, "Character updated");

    Ok(character)
}

pub async fn delete_character(state: &AppState, id: i32) -> Result<()> {
    let db_transaction = state.db.begin_transaction().await?;

    if CharacterRepository::find_character_by_id(&db_transaction, id)
        .await?
        .is_none()
    {
        db_transaction.rollback().await?;
        return Err(AppError::CharacterNotFound);
    }

    CharacterRepository::delete_character(&db_transaction, id).await?;

    db_transaction.commit().await?;
    tracing::info!(character_id = id, "Character deleted");

    Ok(())
}
