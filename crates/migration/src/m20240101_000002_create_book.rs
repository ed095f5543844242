//! Create `book` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 255).not_null())
                    .col(string_len_null(Book::Isbn, 20))
                    .col(string_len_null(Book::Publisher, 255))
                    .col(integer_null(Book::PublicationYear))
                    .col(integer_null(Book::Pages))
                    .col(decimal_len_null(Book::Price, 10, 2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book { Table, Id, Title, Isbn, Publisher, PublicationYear, Pages, Price }
