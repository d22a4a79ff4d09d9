//! Default stand-ins for every use case in `AppState`. Each test swaps in
//! a real mock for the one use case it exercises; the rest fall back to
//! these, which answer with empty data or a generic repository error.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, UserProfile,
};
use crate::auth::application::use_cases::list_users::{
    IListUsersUseCase, ListUsersError, UserSummary,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{
    ILogoutUseCase, LogoutError, LogoutRequest,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterUserResponse,
};
use crate::auth::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileCommand, UpdateProfileError,
};
use crate::cart::application::ports::outgoing::CartItemRecord;
use crate::cart::application::use_cases::add_cart_item::{AddCartItemError, IAddCartItemUseCase};
use crate::cart::application::use_cases::clear_cart::{ClearCartError, IClearCartUseCase};
use crate::cart::application::use_cases::get_cart::{CartView, GetCartError, IGetCartUseCase};
use crate::cart::application::use_cases::remove_cart_item::{
    IRemoveCartItemUseCase, RemoveCartItemError,
};
use crate::cart::application::use_cases::update_cart_item::{
    IUpdateCartItemUseCase, UpdateCartItemError,
};
use crate::category::application::ports::outgoing::CategoryResult;
use crate::category::application::use_cases::create_category::{
    CreateCategoryError, ICreateCategoryUseCase,
};
use crate::category::application::use_cases::delete_category::{
    DeleteCategoryError, IDeleteCategoryUseCase,
};
use crate::category::application::use_cases::get_categories::{
    CategoryWithProducts, GetCategoriesError, IGetCategoriesUseCase,
};
use crate::category::application::use_cases::get_single_category::{
    GetSingleCategoryError, IGetSingleCategoryUseCase,
};
use crate::product::application::ports::outgoing::{
    PhotoResult, ProductCardView, ProductDetailView, ProductListFilter, ProductResult, ProductSort,
};
use crate::product::application::use_cases::add_product_photo::{
    AddProductPhotoError, IAddProductPhotoUseCase,
};
use crate::product::application::use_cases::create_product::{
    CreateProductCommand, CreateProductError, ICreateProductUseCase,
};
use crate::product::application::use_cases::delete_product::{
    DeleteProductError, IDeleteProductUseCase,
};
use crate::product::application::use_cases::get_products::{GetProductsError, IGetProductsUseCase};
use crate::product::application::use_cases::get_single_product::{
    GetSingleProductError, IGetSingleProductUseCase,
};
use crate::product::application::use_cases::update_product::{
    IUpdateProductUseCase, UpdateProductError,
};
use crate::rating::application::ports::outgoing::{RatingItemView, RatingResult};
use crate::rating::application::use_cases::create_rating::{
    CreateRatingError, ICreateRatingUseCase,
};
use crate::rating::application::use_cases::get_ratings::{GetRatingsError, IGetRatingsUseCase};
use crate::review::application::ports::outgoing::{ReviewItemView, ReviewResult};
use crate::review::application::use_cases::create_review::{
    CreateReviewError, ICreateReviewUseCase,
};
use crate::review::application::use_cases::get_reviews::{GetReviewsError, IGetReviewsUseCase};

const NOT_WIRED: &str = "not wired in this test";

// ======================== Auth ========================

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        Err(RegisterError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(NOT_WIRED.into()))
    }
}

pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<(), LogoutError> {
        Err(LogoutError::RevocationFailed(NOT_WIRED.into()))
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::BlacklistCheckFailed(NOT_WIRED.into()))
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserSummary>, ListUsersError> {
        Ok(vec![])
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _requester: Uuid,
        _target: Uuid,
        _command: UpdateProfileCommand,
    ) -> Result<(), UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _requester: Uuid, _target: Uuid) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_WIRED.into()))
    }
}

// ======================== Category ========================

pub struct StubGetCategoriesUseCase;

#[async_trait]
impl IGetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<CategoryWithProducts>, GetCategoriesError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleCategoryUseCase;

#[async_trait]
impl IGetSingleCategoryUseCase for StubGetSingleCategoryUseCase {
    async fn execute(
        &self,
        _category_id: Uuid,
    ) -> Result<CategoryWithProducts, GetSingleCategoryError> {
        Err(GetSingleCategoryError::NotFound)
    }
}

pub struct StubCreateCategoryUseCase;

#[async_trait]
impl ICreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(&self, _name: String) -> Result<CategoryResult, CreateCategoryError> {
        Err(CreateCategoryError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl IDeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
        Err(DeleteCategoryError::RepositoryError(NOT_WIRED.into()))
    }
}

// ======================== Product ========================

pub struct StubGetProductsUseCase;

#[async_trait]
impl IGetProductsUseCase for StubGetProductsUseCase {
    async fn execute(
        &self,
        _filter: ProductListFilter,
        _sort: ProductSort,
    ) -> Result<Vec<ProductCardView>, GetProductsError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleProductUseCase;

#[async_trait]
impl IGetSingleProductUseCase for StubGetSingleProductUseCase {
    async fn execute(
        &self,
        _product_id: Uuid,
    ) -> Result<ProductDetailView, GetSingleProductError> {
        Err(GetSingleProductError::NotFound)
    }
}

pub struct StubCreateProductUseCase;

#[async_trait]
impl ICreateProductUseCase for StubCreateProductUseCase {
    async fn execute(
        &self,
        _owner: Uuid,
        _command: CreateProductCommand,
    ) -> Result<ProductResult, CreateProductError> {
        Err(CreateProductError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUpdateProductUseCase;

#[async_trait]
impl IUpdateProductUseCase for StubUpdateProductUseCase {
    async fn execute(
        &self,
        _requester: Uuid,
        _product_id: Uuid,
        _command: CreateProductCommand,
    ) -> Result<ProductResult, UpdateProductError> {
        Err(UpdateProductError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubDeleteProductUseCase;

#[async_trait]
impl IDeleteProductUseCase for StubDeleteProductUseCase {
    async fn execute(&self, _requester: Uuid, _product_id: Uuid) -> Result<(), DeleteProductError> {
        Err(DeleteProductError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubAddProductPhotoUseCase;

#[async_trait]
impl IAddProductPhotoUseCase for StubAddProductPhotoUseCase {
    async fn execute(
        &self,
        _requester: Uuid,
        _product_id: Uuid,
        _image_path: String,
    ) -> Result<PhotoResult, AddProductPhotoError> {
        Err(AddProductPhotoError::RepositoryError(NOT_WIRED.into()))
    }
}

// ======================== Rating ========================

pub struct StubGetRatingsUseCase;

#[async_trait]
impl IGetRatingsUseCase for StubGetRatingsUseCase {
    async fn execute(
        &self,
        _product_id: Option<Uuid>,
    ) -> Result<Vec<RatingItemView>, GetRatingsError> {
        Ok(vec![])
    }
}

pub struct StubCreateRatingUseCase;

#[async_trait]
impl ICreateRatingUseCase for StubCreateRatingUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _product_id: Uuid,
        _stars: i16,
    ) -> Result<RatingResult, CreateRatingError> {
        Err(CreateRatingError::RepositoryError(NOT_WIRED.into()))
    }
}

// ======================== Review ========================

pub struct StubGetReviewsUseCase;

#[async_trait]
impl IGetReviewsUseCase for StubGetReviewsUseCase {
    async fn execute(
        &self,
        _product_id: Option<Uuid>,
    ) -> Result<Vec<ReviewItemView>, GetReviewsError> {
        Ok(vec![])
    }
}

pub struct StubCreateReviewUseCase;

#[async_trait]
impl ICreateReviewUseCase for StubCreateReviewUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _product_id: Uuid,
        _text: String,
    ) -> Result<ReviewResult, CreateReviewError> {
        Err(CreateReviewError::RepositoryError(NOT_WIRED.into()))
    }
}

// ======================== Cart ========================

pub struct StubGetCartUseCase;

#[async_trait]
impl IGetCartUseCase for StubGetCartUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CartView, GetCartError> {
        Err(GetCartError::QueryFailed(NOT_WIRED.into()))
    }
}

pub struct StubAddCartItemUseCase;

#[async_trait]
impl IAddCartItemUseCase for StubAddCartItemUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _product_id: Uuid,
        _quantity: i32,
    ) -> Result<CartItemRecord, AddCartItemError> {
        Err(AddCartItemError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubUpdateCartItemUseCase;

#[async_trait]
impl IUpdateCartItemUseCase for StubUpdateCartItemUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _item_id: Uuid,
        _quantity: i32,
    ) -> Result<CartItemRecord, UpdateCartItemError> {
        Err(UpdateCartItemError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubRemoveCartItemUseCase;

#[async_trait]
impl IRemoveCartItemUseCase for StubRemoveCartItemUseCase {
    async fn execute(&self, _user_id: Uuid, _item_id: Uuid) -> Result<(), RemoveCartItemError> {
        Err(RemoveCartItemError::RepositoryError(NOT_WIRED.into()))
    }
}

pub struct StubClearCartUseCase;

#[async_trait]
impl IClearCartUseCase for StubClearCartUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), ClearCartError> {
        Err(ClearCartError::RepositoryError(NOT_WIRED.into()))
    }
}
