use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, QueryOrder,
};

use crate::{
    error::Result,
    infrastructure::db::entities::{Planet, planet},
};

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
}

pub struct PlanetRepository;

impl PlanetRepository {
    pub async fn list_planets<C: ConnectionTrait>(db_connection: &C) -> Result<Vec<planet::Model>> {
        Ok(Planet::find()
            .order_by_asc(planet::Column::Id)
            .all(db_connection)
            .await?)
    }

    pub async fn find_planet_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: i32,
    ) -> Result<Option<planet::Model>> {
        Ok(Planet::find_by_id(id).one(db_connection).await?)
    }

    pub async fn create_planet<C: ConnectionTrait>(
        db_connection: &C,
        new_planet: NewPlanet,
    ) -> Result<planet::Model> {
        let planet = planet::ActiveModel {
            name: Set(new_planet.name),
            diameter: Set(new_planet.diameter),
            rotation_period: Set(new_planet.rotation_period),
            orbital_period: Set(new_planet.orbital_period),
            verified: Set(false),
            ..Default::default()
        };

        Ok(planet.insert(db_connection).await?)
    }

    /// Overwrites the diameter and marks the planet as verified.
    pub async fn update_diameter<C: ConnectionTrait>(
        db_connection: &C,
        planet: planet::Model,
        diameter: i32,
    ) -> Result<planet::Model> {
        let mut planet: planet::ActiveModel = planet.into();
        planet.diameter = Set(diameter);
        planet.verified = Set(true);

        Ok(planet.update(db_connection).await?)
    }

    pub async fn delete_planet<C: ConnectionTrait>(db_connection: &C, id: i32) -> Result<u64> {
        Ok(Planet::delete_by_id(id)
            .exec(db_connection)
            .await?
            .rows_affected)
    }
}
