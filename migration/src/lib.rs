pub use sea_orm_migration::prelude::*;

mod m20250314_101500_create_users_table;
mod m20250314_101900_create_categories_table;
mod m20250314_102200_create_products_table;
mod m20250314_102500_create_product_photos_table;
mod m20250314_102800_create_ratings_table;
mod m20250314_103100_create_reviews_table;
mod m20250314_103400_create_carts_table;
mod m20250314_103700_create_cart_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250314_101500_create_users_table::Migration),
            Box::new(m20250314_101900_create_categories_table::Migration),
            Box::new(m20250314_102200_create_products_table::Migration),
            Box::new(m20250314_102500_create_product_photos_table::Migration),
            Box::new(m20250314_102800_create_ratings_table::Migration),
            Box::new(m20250314_103100_create_reviews_table::Migration),
            Box::new(m20250314_103400_create_carts_table::Migration),
            Box::new(m20250314_103700_create_cart_items_table::Migration),
        ]
    }
}
