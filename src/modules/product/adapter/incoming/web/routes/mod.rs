pub mod add_product_photo;
pub mod create_product;
pub mod delete_product;
pub mod get_products;
pub mod get_single_product;
pub mod update_product;

pub use add_product_photo::add_product_photo_handler;
pub use create_product::create_product_handler;
pub use delete_product::delete_product_handler;
pub use get_products::get_products_handler;
pub use get_single_product::get_single_product_handler;
pub use update_product::update_product_handler;
