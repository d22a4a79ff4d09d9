use sea_orm_migration::prelude::*;

use super::m20250314_101500_create_users_table::Users;
use super::m20250314_102200_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // No uniqueness over (user_id, product_id): a user may rate the same
    // product more than once and every row counts toward the average.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ratings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ratings::UserId).uuid().not_null())
                    .col(ColumnDef::new(Ratings::ProductId).uuid().not_null())
                    .col(
                        ColumnDef::new(Ratings::Stars)
                            .small_integer()
                            .not_null()
                            .check(
                                Expr::col(Ratings::Stars)
                                    .gte(1)
                                    .and(Expr::col(Ratings::Stars).lte(5)),
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_user_id")
                            .from(Ratings::Table, Ratings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_product_id")
                            .from(Ratings::Table, Ratings::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Average/count are computed per product on every read.
        manager
            .get_connection()
            .execute_unprepared("CREATE INDEX idx_ratings_product_id ON ratings (product_id);")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_ratings_product_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ratings {
    Table,
    Id,
    UserId,
    ProductId,
    Stars,
}
