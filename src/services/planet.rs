use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::db::{
        entities::planet,
        repositories::{NewPlanet, PlanetRepository},
    },
};

pub async fn list_planets(state: &AppState) -> Result<Vec<planet::Model>> {
    PlanetRepository::list_planets(state.db.get_connection()).await
}

pub async fn get_planet(state: &AppState, id: i32) -> Result<planet::Model> {
    PlanetRepository::find_planet_by_id(state.db.get_connection(), id)
        .await?
        .ok_or(AppError::PlanetNotFound)
}

pub async fn create_planet(state: &AppState, new_planet: NewPlanet) -> Result<planet::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let planet = PlanetRepository::create_planet(&db_transaction, new_planet).await?;

    db_transaction.commit().await?;
    tracing::info!(planet_id = planet.id, "Planet created");

    Ok(planet)
}

pub async fn update_diameter(state: &AppState, id: i32, diameter: i32) -> Result<planet::Model> {
    let db_transaction = state.db.begin_transaction().await?;

    let Some(planet) = PlanetRepository::find_planet_by_id(&db_transaction, id).await? else {
        db_transaction.rollback().await?;
        return Err(AppError::PlanetNotFound);
    };

    let planet = PlanetRepository::update_diameter(&db_transaction, planet, diameter).await?;

    db_transaction.commit().await?;
    tracing::info!(planet_id = id, "Planet updated");

    Ok(planet)
}

pub async fn delete_planet(state: &AppState, id: i32) -> Result<()> {
    let db_transaction = state.db.begin_transaction().await?;

    if PlanetRepository::find_planet_by_id(&db_transaction, id)
        .await?
        .is_none()
    {
        db_transaction.rollback().await?;
        return Err(AppError::PlanetNotFound);
    }

    PlanetRepository::delete_planet(&db_transaction, id).await?;

    db_transaction.commit().await?;
    tracing::info!(planet_id = id, "Planet deleted");

    Ok(())
}
