use sea_orm::{
    DbErr, DeriveIden, DeriveMigrationName,
    sea_query::{ColumnDef, Table},
};
use sea_orm_migration::{MigrationTrait, SchemaManager, async_trait::async_trait};

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    BirthdayYear,
    Gender,
    Height,
    SkinColor,
    EyeColor,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Characters::BirthdayYear).integer().not_null())
                    .col(ColumnDef::new(Characters::Gender).string_len(50).not_null())
                    .col(ColumnDef::new(Characters::Height).integer().not_null())
                    .col(ColumnDef::new(Characters::SkinColor).string_len(50).not_null())
                    .col(ColumnDef::new(Characters::EyeColor).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}
