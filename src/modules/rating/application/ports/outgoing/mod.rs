mod rating_query;
mod rating_repository;

pub use rating_query::{RatingItemView, RatingQuery, RatingQueryError};
pub use rating_repository::{
    CreateRatingData, RatingRepository, RatingRepositoryError, RatingResult,
};
