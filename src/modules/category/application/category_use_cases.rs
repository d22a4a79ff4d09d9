use std::sync::Arc;

use crate::category::application::use_cases::{
    create_category::ICreateCategoryUseCase, delete_category::IDeleteCategoryUseCase,
    get_categories::IGetCategoriesUseCase, get_single_category::IGetSingleCategoryUseCase,
};

#[derive(Clone)]
pub struct CategoryUseCases {
    pub get_list: Arc<dyn IGetCategoriesUseCase + Send + Sync>,
    pub get_single: Arc<dyn IGetSingleCategoryUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateCategoryUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCategoryUseCase + Send + Sync>,
}
