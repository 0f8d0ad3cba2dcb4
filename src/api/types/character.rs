use serde::{Deserialize, Serialize};

use crate::infrastructure::db::{entities::character, repositories::NewCharacter};

#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub birthday_year: i32,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub eye_color: String,
    pub verified: bool,
}

impl From<character::Model> for CharacterResponse {
    fn from(character: character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birthday_year: character.birthday_year,
            gender: character.gender,
            height: character.height,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            verified: character.verified,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCharacterParams {
    pub name: String,
    pub birthday_year: i32,
    pub gender: String,
    pub height: i32,
    pub skin_color: String,
    pub eye_color: String,
}

impl From<CreateCharacterParams> for NewCharacter {
    fn from(params: CreateCharacterParams) -> Self {
        Self {
            name: params.name,
            birthday_year: params.birthday_year,
            gender: params.gender,
            height: params.height,
            skin_color: params.skin_color,
            eye_color: params.eye_color,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCharacterParams {
    pub skin_color: String,
}
