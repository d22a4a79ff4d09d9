use sea_orm_migration::prelude::*;

use super::m20250314_102200_create_products_table::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductPhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductPhotos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductPhotos::ProductId).uuid().not_null())
                    .col(ColumnDef::new(ProductPhotos::ImagePath).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_photos_product_id")
                            .from(ProductPhotos::Table, ProductPhotos::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX idx_product_photos_product_id ON product_photos (product_id);",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_product_photos_product_id")
            .await?;

        manager
            .drop_table(Table::drop().table(ProductPhotos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductPhotos {
    Table,
    Id,
    ProductId,
    ImagePath,
}
