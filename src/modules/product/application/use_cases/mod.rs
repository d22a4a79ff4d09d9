pub mod add_product_photo;
pub mod create_product;
pub mod delete_product;
pub mod get_products;
pub mod get_single_product;
pub mod update_product;
