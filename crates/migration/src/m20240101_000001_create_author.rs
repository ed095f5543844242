//! Create `author` table.
//!
//! `active` defaults to true so records created without it read back as active.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_auto(Author::Id))
                    .col(string_len(Author::Name, 255).not_null())
                    .col(string_len_null(Author::Nationality, 100))
                    .col(date_null(Author::BirthDate))
                    .col(
                        ColumnDef::new(Author::Active)
                            .boolean()
                            .null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Author::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Author { Table, Id, Name, Nationality, BirthDate, Active }
