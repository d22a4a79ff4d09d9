use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::cart::application::ports::outgoing::{
    CartItemRecord, CartRepository, CartRepositoryError,
};
use crate::product::adapter::outgoing::sea_orm_entity::products;

use super::sea_orm_entity::cart_items::{
    ActiveModel as CartItemActiveModel, Column as CartItemColumn, Entity as CartItemEntity,
    Model as CartItemModel,
};
use super::sea_orm_entity::carts::{
    ActiveModel as CartActiveModel, Column as CartColumn, Entity as CartEntity,
};

#[derive(Clone)]
pub struct CartRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> CartRepositoryError {
        CartRepositoryError::DatabaseError(e.to_string())
    }

    async fn item_in_cart(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
    ) -> Result<CartItemModel, CartRepositoryError> {
        CartItemEntity::find_by_id(item_id)
            .filter(CartItemColumn::CartId.eq(cart_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CartRepositoryError::ItemNotFound)
    }

    async fn to_record(&self, item: CartItemModel) -> Result<CartItemRecord, CartRepositoryError> {
        let product = products::Entity::find_by_id(item.product_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CartRepositoryError::ProductNotFound)?;

        Ok(CartItemRecord {
            id: item.id,
            product_id: product.id,
            product_name: product.name,
            price: product.price,
            quantity: item.quantity,
        })
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_or_create_cart(&self, user_id: Uuid) -> Result<Uuid, CartRepositoryError> {
        let existing = CartEntity::find()
            .filter(CartColumn::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if let Some(cart) = existing {
            return Ok(cart.id);
        }

        let active = CartActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(inserted.id)
    }

    async fn list_items(&self, cart_id: Uuid) -> Result<Vec<CartItemRecord>, CartRepositoryError> {
        let items = CartItemEntity::find()
            .filter(CartItemColumn::CartId.eq(cart_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if items.is_empty() {
            return Ok(vec![]);
        }

        let product_ids: Vec<Uuid> = items.iter().map(|i| i.product_id).collect();
        let product_models = products::Entity::find()
            .filter(products::Column::Id.is_in(product_ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let products_by_id: HashMap<Uuid, products::Model> =
            product_models.into_iter().map(|p| (p.id, p)).collect();

        Ok(items
            .into_iter()
            .filter_map(|item| {
                products_by_id.get(&item.product_id).map(|p| CartItemRecord {
                    id: item.id,
                    product_id: p.id,
                    product_name: p.name.clone(),
                    price: p.price,
                    quantity: item.quantity,
                })
            })
            .collect())
    }

    async fn add_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError> {
        // The product must exist before a line can reference it.
        let product = products::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CartRepositoryError::ProductNotFound)?;

        let existing = CartItemEntity::find()
            .filter(CartItemColumn::CartId.eq(cart_id))
            .filter(CartItemColumn::ProductId.eq(product_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let item = match existing {
            Some(item) => {
                let new_quantity = item.quantity + quantity;
                let mut active: CartItemActiveModel = item.into();
                active.quantity = Set(new_quantity);
                active.update(&*self.db).await.map_err(Self::map_db_err)?
            }
            None => {
                let active = CartItemActiveModel {
                    id: Set(Uuid::new_v4()),
                    cart_id: Set(cart_id),
                    product_id: Set(product_id),
                    quantity: Set(quantity),
                };
                active.insert(&*self.db).await.map_err(Self::map_db_err)?
            }
        };

        Ok(CartItemRecord {
            id: item.id,
            product_id: product.id,
            product_name: product.name,
            price: product.price,
            quantity: item.quantity,
        })
    }

    async fn set_quantity(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError> {
        let item = self.item_in_cart(cart_id, item_id).await?;

        let mut active: CartItemActiveModel = item.into();
        active.quantity = Set(quantity);
        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        self.to_record(updated).await
    }

    async fn remove_item(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), CartRepositoryError> {
        let item = self.item_in_cart(cart_id, item_id).await?;

        item.delete(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn clear(&self, cart_id: Uuid) -> Result<(), CartRepositoryError> {
        CartItemEntity::delete_many()
            .filter(CartItemColumn::CartId.eq(cart_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}
