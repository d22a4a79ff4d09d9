use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponseDto, LoginUserInfoDto, RegisterUserRequestDto,
    RegisterUserResponseDto, RegisteredUserDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop Backend API",
        version = "1.0.0",
        description = "Product catalog and shopping cart API",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Catalog endpoints
        // get_products_handler,
        // get_single_product_handler,
        // create_product_handler,
        // update_product_handler,
        // delete_product_handler,
        // add_product_photo_handler,
        // get_categories_handler,
        // get_single_category_handler,
        // create_category_handler,
        // delete_category_handler,

        // Rating/review endpoints
        // get_ratings_handler,
        // create_rating_handler,
        // get_reviews_handler,
        // create_review_handler,

        // Cart endpoints
        // get_cart_handler,
        // add_cart_item_handler,
        // update_cart_item_handler,
        // remove_cart_item_handler,
        // clear_cart_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponseDto>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequestDto,
            RegisterUserResponseDto,
            RegisteredUserDto,
            LoginRequestDto,
            LoginResponseDto,
            LoginUserInfoDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "catalog", description = "Category and product endpoints"),
        (name = "feedback", description = "Rating and review endpoints"),
        (name = "cart", description = "Shopping cart endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
