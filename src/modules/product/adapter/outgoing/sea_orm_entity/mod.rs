pub mod product_photos;
pub mod products;
