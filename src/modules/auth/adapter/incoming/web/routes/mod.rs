pub mod delete_user;
pub mod fetch_user;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
pub mod update_profile;

pub use delete_user::delete_user_handler;
pub use fetch_user::fetch_user_handler;
pub use list_users::list_users_handler;
pub use login_user::login_user_handler;
pub use login_user::__path_login_user_handler;
pub use login_user::{LoginRequestDto, LoginResponseDto, LoginUserInfoDto};
pub use logout_user::logout_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
pub use register_user::__path_register_user_handler;
pub use register_user::{RegisterUserRequestDto, RegisterUserResponseDto, RegisteredUserDto};
pub use update_profile::update_profile_handler;
