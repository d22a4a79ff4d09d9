pub mod product_query;
pub mod product_repository;

pub use product_query::{
    CategoryRefView, ProductCardView, ProductDetailView, ProductListFilter, ProductQuery,
    ProductQueryError, ProductSort, RatingView, ReviewView, UserRefView,
};
pub use product_repository::{
    CreateProductData, PhotoResult, ProductRepository, ProductRepositoryError, ProductResult,
    UpdateProductData,
};
