use std::sync::Arc;

use crate::product::application::use_cases::{
    add_product_photo::IAddProductPhotoUseCase, create_product::ICreateProductUseCase,
    delete_product::IDeleteProductUseCase, get_products::IGetProductsUseCase,
    get_single_product::IGetSingleProductUseCase, update_product::IUpdateProductUseCase,
};

#[derive(Clone)]
pub struct ProductUseCases {
    pub get_list: Arc<dyn IGetProductsUseCase + Send + Sync>,
    pub get_single: Arc<dyn IGetSingleProductUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateProductUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateProductUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteProductUseCase + Send + Sync>,
    pub add_photo: Arc<dyn IAddProductPhotoUseCase + Send + Sync>,
}
