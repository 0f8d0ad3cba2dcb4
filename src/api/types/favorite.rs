use serde::{Deserialize, Serialize};

use crate::infrastructure::db::entities::{favorite_character, favorite_planet};

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteCharacterResponse {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl From<favorite_character::Model> for FavoriteCharacterResponse {
    fn from(favorite: favorite_character::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritePlanetResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl From<favorite_planet::Model> for FavoritePlanetResponse {
    fn from(favorite: favorite_planet::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

/// A missing id is reported with the favorites `ko` envelope, not a parse error.
#[derive(Debug, Deserialize)]
pub struct FavoriteCharacterParams {
    #[serde(default)]
    pub id_character: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct FavoritePlanetParams {
    #[serde(default)]
    pub id_planet: Option<i32>,
}
