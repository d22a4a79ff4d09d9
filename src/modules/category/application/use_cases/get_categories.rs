use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};
use crate::product::application::ports::outgoing::{
    ProductCardView, ProductListFilter, ProductQuery, ProductSort,
};

/// Category with its nested product cards, the shape the category
/// endpoints serve.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithProducts {
    pub id: Uuid,
    pub name: String,
    pub products: Vec<ProductCardView>,
}

#[derive(Debug)]
pub enum GetCategoriesError {
    QueryFailed(String),
}

impl std::fmt::Display for GetCategoriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetCategoriesError::QueryFailed(msg) => {
                write!(f, "Failed to list categories: {}", msg)
            }
        }
    }
}

impl std::error::Error for GetCategoriesError {}

#[async_trait]
pub trait IGetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryWithProducts>, GetCategoriesError>;
}

pub struct GetCategoriesUseCase {
    category_query: Arc<dyn CategoryQuery>,
    product_query: Arc<dyn ProductQuery>,
}

impl GetCategoriesUseCase {
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
impl IGetCategoriesUseCase for GetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<CategoryWithProducts>, GetCategoriesError> {
        let categories = self
            .category_query
            .list_all()
            .await
            .map_err(|CategoryQueryError::DatabaseError(msg)| GetCategoriesError::QueryFailed(msg))?;

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
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
                .map_err(|e| GetCategoriesError::QueryFailed(e.to_string()))?;

            result.push(CategoryWithProducts {
                id: category.id,
                name: category.name,
                products,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::application::ports::outgoing::CategoryResult;
    use crate::product::application::ports::outgoing::{
        ProductDetailView, ProductQueryError, UserRefView,
    };

    struct MockCategoryQuery {
        categories: Vec<CategoryResult>,
    }

    #[async_trait]
    impl CategoryQuery for MockCategoryQuery {
        async fn list_all(&self) -> Result<Vec<CategoryResult>, CategoryQueryError> {
            Ok(self.categories.clone())
        }

        async fn find_by_id(
            &self,
            category_id: Uuid,
        ) -> Result<Option<CategoryResult>, CategoryQueryError> {
            Ok(self
                .categories
                .iter()
                .find(|c| c.id == category_id)
                .cloned())
        }
    }

    struct MockProductQuery;

    #[async_trait]
    impl ProductQuery for MockProductQuery {
        async fn list(
            &self,
            filter: ProductListFilter,
            _sort: ProductSort,
        ) -> Result<Vec<ProductCardView>, ProductQueryError> {
            // One card per category, tagged with the category it was asked for.
            Ok(vec![ProductCardView {
                id: Uuid::new_v4(),
                name: format!("product-of-{}", filter.category_id.unwrap()),
                price: 10,
                photos: vec![],
                owner: UserRefView {
                    id: Uuid::new_v4(),
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
                average_rating: 0.0,
                rating_count: 0,
            }])
        }

        async fn get_by_id(
            &self,
            _product_id: Uuid,
        ) -> Result<ProductDetailView, ProductQueryError> {
            unimplemented!("not used here")
        }
    }

    #[tokio::test]
    async fn nests_products_under_each_category() {
        let cat_a = CategoryResult {
            id: Uuid::new_v4(),
            name: "Amps".to_string(),
        };
        let cat_b = CategoryResult {
            id: Uuid::new_v4(),
            name: "Guitars".to_string(),
        };

        let use_case = GetCategoriesUseCase::new(
            Arc::new(MockCategoryQuery {
                categories: vec![cat_a.clone(), cat_b.clone()],
            }),
            Arc::new(MockProductQuery),
        );

        let result = use_case.execute().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Amps");
        assert_eq!(result[0].products[0].name, format!("product-of-{}", cat_a.id));
        assert_eq!(result[1].products[0].name, format!("product-of-{}", cat_b.id));
    }
}
