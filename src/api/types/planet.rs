use serde::{Deserialize, Serialize};

use crate::infrastructure::db::{entities::planet, repositories::NewPlanet};

#[derive(Debug, Clone, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub verified: bool,
}

impl From<planet::Model> for PlanetResponse {
    fn from(planet: planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            verified: planet.verified,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlanetParams {
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
}

impl From<CreatePlanetParams> for NewPlanet {
    fn from(params: CreatePlanetParams) -> Self {
        Self {
            name: params.name,
            diameter: params.diameter,
            rotation_period: params.rotation_period,
            orbital_period: params.orbital_period,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlanetParams {
    pub diameter: i32,
}
