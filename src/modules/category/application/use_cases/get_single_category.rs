use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};
use crate::category::application::use_cases::get_categories::CategoryWithProducts;
use crate::product::application::ports::outgoing::{
    ProductListFilter, ProductQuery, ProductSort,
};

#[derive(Debug)]
pub enum GetSingleCategoryError {
    NotFound,
    QueryFailed(String),
}

impl std::fmt::Display for GetSingleCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSingleCategoryError::NotFound => write!(f, "Category not found"),
            GetSingleCategoryError::QueryFailed(msg) => {
                write!(f, "Failed to fetch category: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetSingleCategoryError {}

#[async_trait]
pub trait IGetSingleCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        category_id: Uuid,
    ) -> Result<CategoryWithProducts, GetSingleCategoryError>;
}

pub struct GetSingleCategoryUseCase {
    category_query: Arc<dyn CategoryQuery>,
    product_query: Arc<dyn ProductQuery>,
}

impl GetSingleCategoryUseCase {
    pub fn new(
        category_query: Arc<dyn CategoryQuery>,
        product_query: Arc<dyn ProductQuery>,
    ) -> Self {
        Self {
            category_query,
            product_query,
        }
    }
}

#[async_trait]
impl IGetSingleCategoryUseCase for GetSingleCategoryUseCase {
    async fn execute(
        &self,
        category_id: Uuid,
    ) -> Result<CategoryWithProducts, GetSingleCategoryError> {
        let category = self
            .category_query
            .find_by_id(category_id)
            .await
            .map_err(|CategoryQueryError::DatabaseError(msg)| {
                GetSingleCategoryError::QueryFailed(msg)
            })?
            .ok_or(GetSingleCategoryError::NotFound)?;

        let products = self
            .product_query
            .list(
                ProductListFilter {
                    category_id: Some(category.id),
                    ..Default::default()
                },
                ProductSort::Newest,
            )
            .await
            .map_err(|e| GetSingleCategoryError::QueryFailed(e.to_string()))?;

        Ok(CategoryWithProducts {
            id: category.id,
            name: category.name,
            products,
        })
    }
}
