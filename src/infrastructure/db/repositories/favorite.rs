use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::Result,
    infrastructure::db::entities::{
        FavoriteCharacter, FavoritePlanet, favorite_character, favorite_planet,
    },
};

pub struct FavoriteRepository;

impl FavoriteRepository {
    pub async fn add_favorite_character<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
        character_id: i32,
    ) -> Result<favorite_character::Model> {
        let favorite = favorite_character::ActiveModel {
            user_id: Set(user_id),
            character_id: Set(character_id),
            ..Default::default()
        };

        Ok(favorite.insert(db_connection).await?)
    }

    /// Oldest matching row when the pair was favorited more than once.
    pub async fn find_favorite_character<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<favorite_character::Model>> {
        Ok(FavoriteCharacter::find()
            .filter(favorite_character::Column::UserId.eq(user_id))
            .filter(favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(favorite_character::Column::Id)
            .one(db_connection)
            .await?)
    }

    pub async fn delete_favorite_character<C: ConnectionTrait>(
        db_connection: &C,
        id: i32,
    ) -> Result<u64> {
        Ok(FavoriteCharacter::delete_by_id(id)
            .exec(db_connection)
            .await?
            .rows_affected)
    }

    pub async fn list_favorite_characters_by_user<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
    ) -> Result<Vec<favorite_character::Model>> {
        Ok(FavoriteCharacter::find()
            .filter(favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(favorite_character::Column::Id)
            .all(db_connection)
            .await?)
    }

    pub async fn add_favorite_planet<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
        planet_id: i32,
    ) -> Result<favorite_planet::Model> {
        let favorite = favorite_planet::ActiveModel {
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            ..Default::default()
        };

        Ok(favorite.insert(db_connection).await?)
    }

    pub async fn find_favorite_planet<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<favorite_planet::Model>> {
        Ok(FavoritePlanet::find()
            .filter(favorite_planet::Column::UserId.eq(user_id))
            .filter(favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(favorite_planet::Column::Id)
            .one(db_connection)
            .await?)
    }

    pub async fn delete_favorite_planet<C: ConnectionTrait>(
        db_connection: &C,
        id: i32,
    ) -> Result<u64> {
        Ok(FavoritePlanet::delete_by_id(id)
            .exec(db_connection)
            .await?
            .rows_affected)
    }

    pub async fn list_favorite_planets_by_user<C: ConnectionTrait>(
        db_connection: &C,
        user_id: i32,
    ) -> Result<Vec<favorite_planet::Model>> {
        Ok(FavoritePlanet::find()
            .filter(favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(favorite_planet::Column::Id)
            .all(db_connection)
            .await?)
    }
}
