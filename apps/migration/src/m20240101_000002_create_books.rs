use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_book_categories::BookCategories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Books::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Books::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Books::Author).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Books::Isbn)
                            .string_len(17)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Books::Description).text())
                    .col(ColumnDef::new(Books::Price).double().not_null())
                    .col(ColumnDef::new(Books::Quantity).integer().not_null())
                    .col(ColumnDef::new(Books::CategoryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Books::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Books::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_category")
                            .from(Books::Table, Books::CategoryId)
                            .to(BookCategories::Table, BookCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_category_id")
                    .table(Books::Table)
                    .col(Books::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Books {
    Table,
    Id,
    Title,
    Author,
    Isbn,
    Description,
    Price,
    Quantity,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}
