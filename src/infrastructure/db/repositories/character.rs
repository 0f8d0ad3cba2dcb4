use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, QueryOrder,
};

use crate::{
    error::Result,
    infrastructure::db::entities::{Character, character},
};

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub birthday_year: i32,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub eye_color: String,
}

pub struct CharacterRepository;

impl CharacterRepository {
    pub async fn list_characters<C: ConnectionTrait>(
        db_connection: &C,
    ) -> Result<Vec<character::Model>> {
        Ok(Character::find()
            .order_by_asc(character::Column::Id)
            .all(db_connection)
            .await?)
    }

    pub async fn find_character_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: i32,
    ) -> Result<Option<character::Model>> {
        Ok(Character::find_by_id(id).one(db_connection).await?)
    }

    pub async fn create_character<C: ConnectionTrait>(
        db_connection: &C,
        new_character: NewCharacter,
    ) -> Result<character::Model> {
        let character = character::ActiveModel {
            name: Set(new_character.name),
            birthday_year: Set(new_character.birthday_year),
            gender: Set(new_character.gender),
            height: Set(new_character.height),
            skin_color: Set(new_character.skin_color),
            eye_color: Set(new_character.eye_color),
            verified: Set(false),
            ..Default::default()
        };

        Ok(character.insert(db_connection).await?)
    }

    /// Overwrites the skin color and marks the character as verified.
    pub async fn update_skin_color<C: ConnectionTrait>(
        db_connection: &C,
        character: character::Model,
        skin_color: String,
    ) -> Result<character::Model> {
        let mut character: character::ActiveModel = character.into();
        character.skin_color = Set(skin_color);
        character.verified = Set(true);

        Ok(character.update(db_connection).await?)
    }

    pub async fn delete_character<C: ConnectionTrait>(db_connection: &C, id: i32) -> Result<u64> {
        Ok(Character::delete_by_id(id)
            .exec(db_connection)
            .await?
            .rows_affected)
    }
}
