pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::cart;
pub use modules::category;
pub use modules::product;
pub use modules::rating;
pub use modules::review;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::auth::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::cart::adapter::outgoing::cart_repository_postgres::CartRepositoryPostgres;
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::ports::outgoing::CartRepository;
use crate::cart::application::use_cases::{
    add_cart_item::AddCartItemUseCase, clear_cart::ClearCartUseCase, get_cart::GetCartUseCase,
    remove_cart_item::RemoveCartItemUseCase, update_cart_item::UpdateCartItemUseCase,
};

use crate::category::adapter::outgoing::category_query_postgres::CategoryQueryPostgres;
use crate::category::adapter::outgoing::category_repository_postgres::CategoryRepositoryPostgres;
use crate::category::application::category_use_cases::CategoryUseCases;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryRepository};
use crate::category::application::use_cases::{
    create_category::CreateCategoryUseCase, delete_category::DeleteCategoryUseCase,
    get_categories::GetCategoriesUseCase, get_single_category::GetSingleCategoryUseCase,
};

use crate::product::adapter::outgoing::product_query_postgres::ProductQueryPostgres;
use crate::product::adapter::outgoing::product_repository_postgres::ProductRepositoryPostgres;
use crate::product::application::ports::outgoing::{ProductQuery, ProductRepository};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::product::application::use_cases::{
    add_product_photo::AddProductPhotoUseCase, create_product::CreateProductUseCase,
    delete_product::DeleteProductUseCase, get_products::GetProductsUseCase,
    get_single_product::GetSingleProductUseCase, update_product::UpdateProductUseCase,
};

use crate::rating::adapter::outgoing::rating_query_postgres::RatingQueryPostgres;
use crate::rating::adapter::outgoing::rating_repository_postgres::RatingRepositoryPostgres;
use crate::rating::application::ports::outgoing::{RatingQuery, RatingRepository};
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::rating::application::use_cases::{
    create_rating::CreateRatingUseCase, get_ratings::GetRatingsUseCase,
};

use crate::review::adapter::outgoing::review_query_postgres::ReviewQueryPostgres;
use crate::review::adapter::outgoing::review_repository_postgres::ReviewRepositoryPostgres;
use crate::review::application::ports::outgoing::{ReviewQuery, ReviewRepository};
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::review::application::use_cases::{
    create_review::CreateReviewUseCase, get_reviews::GetReviewsUseCase,
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub category: CategoryUseCases,
    pub product: ProductUseCases,
    pub rating: RatingUseCases,
    pub review: ReviewUseCases,
    pub cart: CartUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection (refresh-token blacklist)
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared adapters
    let jwt_service = Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = jwt_service.clone();
    let token_provider_for_state: Arc<dyn TokenProvider> = jwt_service.clone();

    let argon2_hasher: Arc<dyn PasswordHasher> =
        Arc::new(if std::env::var("RUST_ENV").as_deref() == Ok("production") {
            Argon2Hasher::new()
        } else {
            Argon2Hasher::from_env()
        });

    let user_repo: Arc<dyn UserRepository> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let user_query: Arc<dyn UserQuery> = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let token_repo: Arc<dyn TokenRepository> =
        Arc::new(RedisTokenRepository::new(Arc::clone(&redis_arc)));

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        argon2_hasher.clone(),
        token_provider_for_state.clone(),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        argon2_hasher.clone(),
        token_provider_for_state.clone(),
    );
    let logout_user_use_case =
        LogoutUseCase::new(token_repo.clone(), token_provider_for_state.clone());
    let refresh_token_use_case =
        RefreshTokenUseCase::new(token_provider_for_state.clone(), token_repo.clone());
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let fetch_profile_use_case = FetchProfileUseCase::new(user_query.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(user_repo.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_repo.clone());

    // Catalog use cases
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(CategoryRepositoryPostgres::new(Arc::clone(&db_arc)));
    let category_query: Arc<dyn CategoryQuery> =
        Arc::new(CategoryQueryPostgres::new(Arc::clone(&db_arc)));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(ProductRepositoryPostgres::new(Arc::clone(&db_arc)));
    let product_query: Arc<dyn ProductQuery> =
        Arc::new(ProductQueryPostgres::new(Arc::clone(&db_arc)));
    let rating_repo: Arc<dyn RatingRepository> =
        Arc::new(RatingRepositoryPostgres::new(Arc::clone(&db_arc)));
    let rating_query: Arc<dyn RatingQuery> =
        Arc::new(RatingQueryPostgres::new(Arc::clone(&db_arc)));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(ReviewRepositoryPostgres::new(Arc::clone(&db_arc)));
    let review_query: Arc<dyn ReviewQuery> =
        Arc::new(ReviewQueryPostgres::new(Arc::clone(&db_arc)));
    let cart_repo: Arc<dyn CartRepository> =
        Arc::new(CartRepositoryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        category: CategoryUseCases {
            get_list: Arc::new(GetCategoriesUseCase::new(
                category_query.clone(),
                product_query.clone(),
            )),
            get_single: Arc::new(GetSingleCategoryUseCase::new(
                category_query.clone(),
                product_query.clone(),
            )),
            create: Arc::new(CreateCategoryUseCase::new(category_repo.clone())),
            delete: Arc::new(DeleteCategoryUseCase::new(category_repo.clone())),
        },
        product: ProductUseCases {
            get_list: Arc::new(GetProductsUseCase::new(product_query.clone())),
            get_single: Arc::new(GetSingleProductUseCase::new(product_query.clone())),
            create: Arc::new(CreateProductUseCase::new(product_repo.clone())),
            update: Arc::new(UpdateProductUseCase::new(product_repo.clone())),
            delete: Arc::new(DeleteProductUseCase::new(product_repo.clone())),
            add_photo: Arc::new(AddProductPhotoUseCase::new(product_repo.clone())),
        },
        rating: RatingUseCases {
            get_list: Arc::new(GetRatingsUseCase::new(rating_query.clone())),
            create: Arc::new(CreateRatingUseCase::new(rating_repo.clone())),
        },
        review: ReviewUseCases {
            get_list: Arc::new(GetReviewsUseCase::new(review_query.clone())),
            create: Arc::new(CreateReviewUseCase::new(review_repo.clone())),
        },
        cart: CartUseCases {
            get: Arc::new(GetCartUseCase::new(cart_repo.clone(), user_query.clone())),
            add_item: Arc::new(AddCartItemUseCase::new(cart_repo.clone())),
            update_item: Arc::new(UpdateCartItemUseCase::new(cart_repo.clone())),
            remove_item: Arc::new(RemoveCartItemUseCase::new(cart_repo.clone())),
            clear: Arc::new(ClearCartUseCase::new(cart_repo.clone())),
        },
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    // User profiles
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_user_handler);
    // Categories
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_single_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    // Products
    cfg.service(crate::product::adapter::incoming::web::routes::get_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_single_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::delete_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::add_product_photo_handler);
    // Ratings & reviews
    cfg.service(crate::rating::adapter::incoming::web::routes::get_ratings_handler);
    cfg.service(crate::rating::adapter::incoming::web::routes::create_rating_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::get_reviews_handler);
    cfg.service(crate::review::adapter::incoming::web::routes::create_review_handler);
    // Cart
    cfg.service(crate::cart::adapter::incoming::web::routes::get_cart_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::add_cart_item_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::update_cart_item_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::remove_cart_item_handler);
    cfg.service(crate::cart::adapter::incoming::web::routes::clear_cart_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
