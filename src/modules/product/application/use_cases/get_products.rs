use async_trait::async_trait;
use std::sync::Arc;

use crate::product::application::ports::outgoing::{
    ProductCardView, ProductListFilter, ProductQuery, ProductQueryError, ProductSort,
};

#[derive(Debug)]
pub enum GetProductsError {
    QueryFailed(String),
}

impl std::fmt::Display for GetProductsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetProductsError::QueryFailed(msg) => write!(f, "Failed to list products: {}", msg),
        }
    }
}

impl std::error::Error for GetProductsError {}

#[async_trait]
pub trait IGetProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
    ) -> Result<Vec<ProductCardView>, GetProductsError>;
}

pub struct GetProductsUseCase {
    query: Arc<dyn ProductQuery>,
}

impl GetProductsUseCase {
    pub fn new(query: Arc<dyn ProductQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetProductsUseCase for GetProductsUseCase {
    async fn execute(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
    ) -> Result<Vec<ProductCardView>, GetProductsError> {
        self.query.list(filter, sort).await.map_err(|e| match e {
            ProductQueryError::NotFound => GetProductsError::QueryFailed("unexpected".into()),
            ProductQueryError::DatabaseError(msg) => GetProductsError::QueryFailed(msg),
        })
    }
}
