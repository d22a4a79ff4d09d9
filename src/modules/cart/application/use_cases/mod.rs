pub mod add_cart_item;
pub mod clear_cart;
pub mod get_cart;
pub mod remove_cart_item;
pub mod update_cart_item;
