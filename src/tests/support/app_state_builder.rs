use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::list_users::IListUsersUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::use_cases::add_cart_item::IAddCartItemUseCase;
use crate::cart::application::use_cases::clear_cart::IClearCartUseCase;
use crate::cart::application::use_cases::get_cart::IGetCartUseCase;
use crate::cart::application::use_cases::remove_cart_item::IRemoveCartItemUseCase;
use crate::cart::application::use_cases::update_cart_item::IUpdateCartItemUseCase;
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::use_cases::create_category::ICreateCategoryUseCase;
use crate::category::application::use_cases::delete_category::IDeleteCategoryUseCase;
use crate::category::application::use_cases::get_categories::IGetCategoriesUseCase;
use crate::category::application::use_cases::get_single_category::IGetSingleCategoryUseCase;
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::use_cases::add_product_photo::IAddProductPhotoUseCase;
use crate::product::application::use_cases::create_product::ICreateProductUseCase;
use crate::product::application::use_cases::delete_product::IDeleteProductUseCase;
use crate::product::application::use_cases::get_products::IGetProductsUseCase;
use crate::product::application::use_cases::get_single_product::IGetSingleProductUseCase;
use crate::product::application::use_cases::update_product::IUpdateProductUseCase;
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::rating::application::use_cases::create_rating::ICreateRatingUseCase;
use crate::rating::application::use_cases::get_ratings::IGetRatingsUseCase;
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::review::application::use_cases::create_review::ICreateReviewUseCase;
use crate::review::application::use_cases::get_reviews::IGetReviewsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where everything is stubbed; tests override the
/// one use case their handler touches.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    category: CategoryUseCases,
    product: ProductUseCases,
    rating: RatingUseCases,
    review: ReviewUseCases,
    cart: CartUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            category: CategoryUseCases {
                get_list: Arc::new(StubGetCategoriesUseCase),
                get_single: Arc::new(StubGetSingleCategoryUseCase),
                create: Arc::new(StubCreateCategoryUseCase),
                delete: Arc::new(StubDeleteCategoryUseCase),
            },
            product: ProductUseCases {
                get_list: Arc::new(StubGetProductsUseCase),
                get_single: Arc::new(StubGetSingleProductUseCase),
                create: Arc::new(StubCreateProductUseCase),
                update: Arc::new(StubUpdateProductUseCase),
                delete: Arc::new(StubDeleteProductUseCase),
                add_photo: Arc::new(StubAddProductPhotoUseCase),
            },
            rating: RatingUseCases {
                get_list: Arc::new(StubGetRatingsUseCase),
                create: Arc::new(StubCreateRatingUseCase),
            },
            review: ReviewUseCases {
                get_list: Arc::new(StubGetReviewsUseCase),
                create: Arc::new(StubCreateReviewUseCase),
            },
            cart: CartUseCases {
                get: Arc::new(StubGetCartUseCase),
                add_item: Arc::new(StubAddCartItemUseCase),
                update_item: Arc::new(StubUpdateCartItemUseCase),
                remove_item: Arc::new(StubRemoveCartItemUseCase),
                clear: Arc::new(StubClearCartUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ---- auth ----

    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    // ---- category ----

    pub fn with_get_categories(
        mut self,
        uc: impl IGetCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_category(
        mut self,
        uc: impl IGetSingleCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_category(
        mut self,
        uc: impl ICreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.create = Arc::new(uc);
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl IDeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.category.delete = Arc::new(uc);
        self
    }

    // ---- product ----

    pub fn with_get_products(
        mut self,
        uc: impl IGetProductsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_product(
        mut self,
        uc: impl IGetSingleProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_product(
        mut self,
        uc: impl ICreateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.create = Arc::new(uc);
        self
    }

    pub fn with_update_product(
        mut self,
        uc: impl IUpdateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.update = Arc::new(uc);
        self
    }

    pub fn with_delete_product(
        mut self,
        uc: impl IDeleteProductUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.delete = Arc::new(uc);
        self
    }

    pub fn with_add_product_photo(
        mut self,
        uc: impl IAddProductPhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.product.add_photo = Arc::new(uc);
        self
    }

    // ---- rating / review ----

    pub fn with_get_ratings(mut self, uc: impl IGetRatingsUseCase + Send + Sync + 'static) -> Self {
        self.rating.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_rating(
        mut self,
        uc: impl ICreateRatingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.rating.create = Arc::new(uc);
        self
    }

    pub fn with_get_reviews(mut self, uc: impl IGetReviewsUseCase + Send + Sync + 'static) -> Self {
        self.review.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_review(
        mut self,
        uc: impl ICreateReviewUseCase + Send + Sync + 'static,
    ) -> Self {
        self.review.create = Arc::new(uc);
        self
    }

    // ---- cart ----

    pub fn with_get_cart(mut self, uc: impl IGetCartUseCase + Send + Sync + 'static) -> Self {
        self.cart.get = Arc::new(uc);
        self
    }

    pub fn with_add_cart_item(
        mut self,
        uc: impl IAddCartItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cart.add_item = Arc::new(uc);
        self
    }

    pub fn with_update_cart_item(
        mut self,
        uc: impl IUpdateCartItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cart.update_item = Arc::new(uc);
        self
    }

    pub fn with_remove_cart_item(
        mut self,
        uc: impl IRemoveCartItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cart.remove_item = Arc::new(uc);
        self
    }

    pub fn with_clear_cart(mut self, uc: impl IClearCartUseCase + Send + Sync + 'static) -> Self {
        self.cart.clear = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            refresh_token_use_case: self.refresh_token,
            list_users_use_case: self.list_users,
            fetch_profile_use_case: self.fetch_profile,
            update_profile_use_case: self.update_profile,
            delete_user_use_case: self.delete_user,
            category: self.category,
            product: self.product,
            rating: self.rating,
            review: self.review,
            cart: self.cart,
        })
    }
}
