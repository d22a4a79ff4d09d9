use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{
    ProductDetailView, ProductQuery, ProductQueryError,
};

#[derive(Debug)]
pub enum GetSingleProductError {
    NotFound,
    QueryFailed(String),
}

impl std::fmt::Display for GetSingleProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetSingleProductError::NotFound => write!(f, "Product not found"),
            GetSingleProductError::QueryFailed(msg) => {
                write!(f, "Failed to fetch product: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetSingleProductError {}

#[async_trait]
pub trait IGetSingleProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<ProductDetailView, GetSingleProductError>;
}

pub struct GetSingleProductUseCase {
    query: Arc<dyn ProductQuery>,
}

impl GetSingleProductUseCase {
    pub fn new(query: Arc<dyn ProductQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetSingleProductUseCase for GetSingleProductUseCase {
    async fn execute(&self, product_id: Uuid) -> Result<ProductDetailView, GetSingleProductError> {
        self.query.get_by_id(product_id).await.map_err(|e| match e {
            ProductQueryError::NotFound => GetSingleProductError::NotFound,
            ProductQueryError::DatabaseError(msg) => GetSingleProductError::QueryFailed(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::application::ports::outgoing::{
        CategoryRefView, ProductCardView, ProductListFilter, ProductSort, UserRefView,
    };

    struct MockQuery {
        known_id: Uuid,
    }

    #[async_trait]
    impl ProductQuery for MockQuery {
        async fn list(
            &self,
            _filter: ProductListFilter,
            _sort: ProductSort,
        ) -> Result<Vec<ProductCardView>, ProductQueryError> {
            unimplemented!("not used here")
        }

        async fn get_by_id(
            &self,
            product_id: Uuid,
        ) -> Result<ProductDetailView, ProductQueryError> {
            if product_id != self.known_id {
                return Err(ProductQueryError::NotFound);
            }
            Ok(ProductDetailView {
                id: product_id,
                category: CategoryRefView {
                    id: Uuid::new_v4(),
                    name: "Instruments".to_string(),
                },
                name: "Guitar".to_string(),
                description: "Six strings".to_string(),
                price: 500,
                is_original: true,
                video_path: None,
                photos: vec![],
                created_at: chrono::Utc::now(),
                owner: UserRefView {
                    id: Uuid::new_v4(),
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
                ratings: vec![],
                reviews: vec![],
                average_rating: 0.0,
                rating_count: 0,
            })
        }
    }

    #[tokio::test]
    async fn known_product_is_returned() {
        let id = Uuid::new_v4();
        let use_case = GetSingleProductUseCase::new(Arc::new(MockQuery { known_id: id }));

        let detail = use_case.execute(id).await.unwrap();
        assert_eq!(detail.name, "Guitar");
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let use_case = GetSingleProductUseCase::new(Arc::new(MockQuery {
            known_id: Uuid::new_v4(),
        }));

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetSingleProductError::NotFound)));
    }
}
