use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::{
    CreateRatingData, RatingRepository, RatingRepositoryError, RatingResult,
};

#[derive(Debug)]
pub enum CreateRatingError {
    StarsOutOfRange,
    ProductNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for CreateRatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateRatingError::StarsOutOfRange => {
                write!(f, "Stars must be between 1 and 5")
            }
            CreateRatingError::ProductNotFound => write!(f, "Product not found"),
            CreateRatingError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateRatingError {}

#[async_trait]
pub trait ICreateRatingUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        stars: i16,
    ) -> Result<RatingResult, CreateRatingError>;
}

/// Rating the same product twice just inserts another row; that is the
/// documented behavior, not an oversight to guard against here.
pub struct CreateRatingUseCase {
    repository: Arc<dyn RatingRepository>,
}

impl CreateRatingUseCase {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ICreateRatingUseCase for CreateRatingUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        stars: i16,
    ) -> Result<RatingResult, CreateRatingError> {
        if !(1..=5).contains(&stars) {
            return Err(CreateRatingError::StarsOutOfRange);
        }

        self.repository
            .create_rating(CreateRatingData {
                user_id,
                product_id,
                stars,
            })
            .await
            .map_err(|e| match e {
                RatingRepositoryError::ProductNotFound => CreateRatingError::ProductNotFound,
                other => CreateRatingError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CountingRepository {
        inserted: Mutex<u32>,
    }

    #[async_trait]
    impl RatingRepository for CountingRepository {
        async fn create_rating(
            &self,
            data: CreateRatingData,
        ) -> Result<RatingResult, RatingRepositoryError> {
            *self.inserted.lock().unwrap() += 1;
            Ok(RatingResult {
                id: Uuid::new_v4(),
                product_id: data.product_id,
                stars: data.stars,
            })
        }
    }

    #[tokio::test]
    async fn valid_stars_create_rating() {
        let use_case = CreateRatingUseCase::new(Arc::new(CountingRepository {
            inserted: Mutex::new(0),
        }));

        let result = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4(), 5)
            .await
            .unwrap();
        assert_eq!(result.stars, 5);
    }

    #[tokio::test]
    async fn stars_out_of_range_are_rejected() {
        let use_case = CreateRatingUseCase::new(Arc::new(CountingRepository {
            inserted: Mutex::new(0),
        }));

        for stars in [0, 6, -1] {
            let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4(), stars).await;
            assert!(matches!(result, Err(CreateRatingError::StarsOutOfRange)));
        }
    }

    #[tokio::test]
    async fn same_user_may_rate_a_product_repeatedly() {
        let repo = Arc::new(CountingRepository {
            inserted: Mutex::new(0),
        });
        let use_case = CreateRatingUseCase::new(repo.clone());

        let user = Uuid::new_v4();
        let product = Uuid::new_v4();

        use_case.execute(user, product, 2).await.unwrap();
        use_case.execute(user, product, 5).await.unwrap();

        assert_eq!(*repo.inserted.lock().unwrap(), 2);
    }
}
