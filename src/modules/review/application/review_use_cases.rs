use std::sync::Arc;

use crate::review::application::use_cases::{
    create_review::ICreateReviewUseCase, get_reviews::IGetReviewsUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub get_list: Arc<dyn IGetReviewsUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateReviewUseCase + Send + Sync>,
}
