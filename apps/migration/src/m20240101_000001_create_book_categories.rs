use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BookCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookCategories::Description).string_len(500))
                    .col(
                        ColumnDef::new(BookCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Category names are unique regardless of case.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_book_categories_name_lower \
                 ON book_categories (LOWER(name))",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum BookCategories {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
