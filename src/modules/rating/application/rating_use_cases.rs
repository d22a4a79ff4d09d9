use std::sync::Arc;

use crate::rating::application::use_cases::{
    create_rating::ICreateRatingUseCase, get_ratings::IGetRatingsUseCase,
};

#[derive(Clone)]
pub struct RatingUseCases {
    pub get_list: Arc<dyn IGetRatingsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateRatingUseCase + Send + Sync>,
}
