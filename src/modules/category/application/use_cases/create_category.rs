use async_trait::async_trait;
use std::sync::Arc;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CategoryResult,
};

#[derive(Debug)]
pub enum CreateCategoryError {
    EmptyName,
    NameTooLong,
    NameTaken,
    RepositoryError(String),
}

impl std::fmt::Display for CreateCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateCategoryError::EmptyName => write!(f, "Category name cannot be empty"),
            CreateCategoryError::NameTooLong => {
                write!(f, "Category name must not exceed 32 characters")
            }
            CreateCategoryError::NameTaken => write!(f, "Category name already exists"),
            CreateCategoryError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateCategoryError {}

#[async_trait]
pub trait ICreateCategoryUseCase: Send + Sync {
    async fn execute(&self, name: String) -> Result<CategoryResult, CreateCategoryError>;
}

pub struct CreateCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ICreateCategoryUseCase for CreateCategoryUseCase {
    async fn execute(&self, name: String) -> Result<CategoryResult, CreateCategoryError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CreateCategoryError::EmptyName);
        }
        if name.len() > 32 {
            return Err(CreateCategoryError::NameTooLong);
        }

        self.repository
            .create_category(name)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::NameTaken => CreateCategoryError::NameTaken,
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct MockRepository {
        taken: bool,
    }

    #[async_trait]
    impl CategoryRepository for MockRepository {
        async fn create_category(
            &self,
            name: String,
        ) -> Result<CategoryResult, CategoryRepositoryError> {
            if self.taken {
                return Err(CategoryRepositoryError::NameTaken);
            }
            Ok(CategoryResult {
                id: Uuid::new_v4(),
                name,
            })
        }

        async fn delete_category(
            &self,
            _category_id: Uuid,
        ) -> Result<(), CategoryRepositoryError> {
            unimplemented!("not used here")
        }
    }

    #[tokio::test]
    async fn creates_trimmed_category() {
        let use_case = CreateCategoryUseCase::new(Arc::new(MockRepository { taken: false }));

        let result = use_case.execute("  Guitars ".to_string()).await.unwrap();
        assert_eq!(result.name, "Guitars");
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let use_case = CreateCategoryUseCase::new(Arc::new(MockRepository { taken: false }));

        let result = use_case.execute("   ".to_string()).await;
        assert!(matches!(result, Err(CreateCategoryError::EmptyName)));
    }

    #[tokio::test]
    async fn duplicate_name_is_reported() {
        let use_case = CreateCategoryUseCase::new(Arc::new(MockRepository { taken: true }));

        let result = use_case.execute("Guitars".to_string()).await;
        assert!(matches!(result, Err(CreateCategoryError::NameTaken)));
    }
}
