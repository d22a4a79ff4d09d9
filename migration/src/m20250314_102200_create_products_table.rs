use sea_orm_migration::prelude::*;

use super::m20250314_101500_create_users_table::Users;
use super::m20250314_101900_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // Deleting a category or an owning user cascades to its products
    // (and from there to photos, ratings, reviews and cart items).
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Products::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Products::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(
                        ColumnDef::new(Products::Price)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Products::Price).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Products::IsOriginal)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Products::VideoPath).text())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_owner_id")
                            .from(Products::Table, Products::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts by created_at / price / name and filters by category.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_products_created_at ON products (created_at DESC);
                CREATE INDEX idx_products_category_id ON products (category_id);
                CREATE INDEX idx_products_owner_id ON products (owner_id);
                CREATE INDEX idx_products_name ON products (name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_products_created_at;
                DROP INDEX IF EXISTS idx_products_category_id;
                DROP INDEX IF EXISTS idx_products_owner_id;
                DROP INDEX IF EXISTS idx_products_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    CategoryId,
    OwnerId,
    Name,
    Description,
    Price,
    IsOriginal,
    VideoPath,
    CreatedAt,
}
