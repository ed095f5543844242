use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Author: range filter on birth_date
        manager
            .create_index(
                Index::create()
                    .name("idx_author_birth_date")
                    .table(Author::Table)
                    .col(Author::BirthDate)
                    .to_owned(),
            )
            .await?;

        // Book: range filter on pages
        manager
            .create_index(
                Index::create()
                    .name("idx_book_pages")
                    .table(Book::Table)
                    .col(Book::Pages)
                    .to_owned(),
            )
            .await?;

        // Book: isbn is unique when present (NULLs never collide in postgres)
        manager
            .create_index(
                Index::create()
                    .name("uniq_book_isbn")
                    .table(Book::Table)
                    .col(Book::Isbn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("uniq_book_isbn").table(Book::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_book_pages").table(Book::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_author_birth_date").table(Author::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Author { Table, BirthDate }

#[derive(DeriveIden)]
enum Book { Table, Isbn, Pages }
