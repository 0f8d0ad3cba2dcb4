use sea_orm::{
    DbErr, DeriveIden, DeriveMigrationName,
    sea_query::{ColumnDef, Table},
};
use sea_orm_migration::{MigrationTrait, SchemaManager, async_trait::async_trait};

use super::m20261018_000002_create_characters::Characters;
use super::m20261018_000003_create_planets::Planets;

#[derive(DeriveIden)]
enum Flags {
    Verified,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

// One column per ALTER statement, SQLite rejects multi-column alters.
#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Characters::Table)
                    .add_column(
                        ColumnDef::new(Flags::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Planets::Table)
                    .add_column(
                        ColumnDef::new(Flags::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Characters::Table)
                    .drop_column(Flags::Verified)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Planets::Table)
                    .drop_column(Flags::Verified)
                    .to_owned(),
            )
            .await
    }
}
