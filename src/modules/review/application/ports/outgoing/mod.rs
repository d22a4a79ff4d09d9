mod review_query;
mod review_repository;

pub use review_query::{ReviewItemView, ReviewQuery, ReviewQueryError};
pub use review_repository::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};
