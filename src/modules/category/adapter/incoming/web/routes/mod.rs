pub mod create_category;
pub mod delete_category;
pub mod get_categories;
pub mod get_single_category;

pub use create_category::create_category_handler;
pub use delete_category::delete_category_handler;
pub use get_categories::get_categories_handler;
pub use get_single_category::get_single_category_handler;
