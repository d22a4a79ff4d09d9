use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::use_cases::create_product::{
    CreateProductCommand, CreateProductCommandError,
};
use crate::product::application::ports::outgoing::{
    ProductRepository, ProductRepositoryError, ProductResult, UpdateProductData,
};

#[derive(Debug)]
pub enum UpdateProductError {
    Invalid(CreateProductCommandError),
    NotOwner,
    ProductNotFound,
    CategoryNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProductError::Invalid(e) => write!(f, "{}", e),
            UpdateProductError::NotOwner => {
                write!(f, "Products can only be edited by their owner")
            }
            UpdateProductError::ProductNotFound => write!(f, "Product not found"),
            UpdateProductError::CategoryNotFound => write!(f, "Category not found"),
            UpdateProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProductError {}

#[async_trait]
pub trait IUpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Uuid,
        product_id: Uuid,
        command: CreateProductCommand,
    ) -> Result<ProductResult, UpdateProductError>;
}

/// PUT semantics: the command carries every mutable field and replaces
/// them wholesale. The ownership check runs before any write.
pub struct UpdateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IUpdateProductUseCase for UpdateProductUseCase {
    async fn execute(
        &self,
        requester: Uuid,
        product_id: Uuid,
        command: CreateProductCommand,
    ) -> Result<ProductResult, UpdateProductError> {
        command.validate().map_err(UpdateProductError::Invalid)?;

        let owner = self
            .repository
            .find_owner(product_id)
            .await
            .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProductError::ProductNotFound)?;

        if owner != requester {
            return Err(UpdateProductError::NotOwner);
        }

        self.repository
            .update_product(
                product_id,
                UpdateProductData {
                    category_id: command.category_id,
                    name: command.name.trim().to_string(),
                    description: command.description,
                    price: command.price,
                    is_original: command.is_original,
                    video_path: command.video_path,
                },
            )
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                ProductRepositoryError::CategoryNotFound => UpdateProductError::CategoryNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::application::ports::outgoing::{CreateProductData, PhotoResult};

    struct MockRepository {
        owner: Uuid,
        product_id: Uuid,
    }

    #[async_trait]
    impl ProductRepository for MockRepository {
        async fn create_product(
            &self,
            _data: CreateProductData,
        ) -> Result<ProductResult, ProductRepositoryError> {
            unimplemented!("not used here")
        }

        async fn update_product(
            &self,
            product_id: Uuid,
            data: UpdateProductData,
        ) -> Result<ProductResult, ProductRepositoryError> {
            Ok(ProductResult {
                id: product_id,
                name: data.name,
                price: data.price,
                owner_id: self.owner,
            })
        }

        async fn delete_product(&self, _product_id: Uuid) -> Result<(), ProductRepositoryError> {
            unimplemented!("not used here")
        }

        async fn add_photo(
            &self,
            _product_id: Uuid,
            _image_path: String,
        ) -> Result<PhotoResult, ProductRepositoryError> {
            unimplemented!("not used here")
        }

        async fn find_owner(
            &self,
            product_id: Uuid,
        ) -> Result<Option<Uuid>, ProductRepositoryError> {
            if product_id == self.product_id {
                Ok(Some(self.owner))
            } else {
                Ok(None)
            }
        }
    }

    fn command() -> CreateProductCommand {
        CreateProductCommand {
            category_id: Uuid::new_v4(),
            name: "Bass".to_string(),
            description: "Four strings".to_string(),
            price: 700,
            is_original: true,
            video_path: None,
        }
    }

    #[tokio::test]
    async fn owner_can_update() {
        let owner = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let use_case = UpdateProductUseCase::new(Arc::new(MockRepository { owner, product_id }));

        let result = use_case.execute(owner, product_id, command()).await.unwrap();
        assert_eq!(result.name, "Bass");
    }

    #[tokio::test]
    async fn non_owner_is_rejected_before_any_write() {
        let product_id = Uuid::new_v4();
        let use_case = UpdateProductUseCase::new(Arc::new(MockRepository {
            owner: Uuid::new_v4(),
            product_id,
        }));

        let result = use_case
            .execute(Uuid::new_v4(), product_id, command())
            .await;
        assert!(matches!(result, Err(UpdateProductError::NotOwner)));
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let use_case = UpdateProductUseCase::new(Arc::new(MockRepository {
            owner: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
        }));

        let result = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4(), command())
            .await;
        assert!(matches!(result, Err(UpdateProductError::ProductNotFound)));
    }

    #[tokio::test]
    async fn invalid_command_is_rejected() {
        let owner = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let use_case = UpdateProductUseCase::new(Arc::new(MockRepository { owner, product_id }));

        let mut cmd = command();
        cmd.price = -5;

        let result = use_case.execute(owner, product_id, cmd).await;
        assert!(matches!(result, Err(UpdateProductError::Invalid(_))));
    }
}
