use std::sync::Arc;

use crate::cart::application::use_cases::{
    add_cart_item::IAddCartItemUseCase, clear_cart::IClearCartUseCase, get_cart::IGetCartUseCase,
    remove_cart_item::IRemoveCartItemUseCase, update_cart_item::IUpdateCartItemUseCase,
};

#[derive(Clone)]
pub struct CartUseCases {
    pub get: Arc<dyn IGetCartUseCase + Send + Sync>,
    pub add_item: Arc<dyn IAddCartItemUseCase + Send + Sync>,
    pub update_item: Arc<dyn IUpdateCartItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn IRemoveCartItemUseCase + Send + Sync>,
    pub clear: Arc<dyn IClearCartUseCase + Send + Sync>,
}
