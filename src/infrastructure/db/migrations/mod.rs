use sea_orm_migration::{MigrationTrait, MigratorTrait, async_trait::async_trait};

mod m20261018_000001_create_users;
mod m20261018_000002_create_characters;
mod m20261018_000003_create_planets;
mod m20261018_000004_create_favorite_characters;
mod m20261018_000005_create_favorite_planets;
mod m20261018_000006_add_verified_flags;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_users::Migration),
            Box::new(m20261018_000002_create_characters::Migration),
            Box::new(m20261018_000003_create_planets::Migration),
            Box::new(m20261018_000004_create_favorite_characters::Migration),
            Box::new(m20261018_000005_create_favorite_planets::Migration),
            Box::new(m20261018_000006_add_verified_flags::Migration),
        ]
    }
}
