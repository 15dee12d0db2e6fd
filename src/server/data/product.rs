//! Product data repository for catalog operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{Product, ProductParam};

/// Repository providing database operations for partner catalogs.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product in a partner's catalog.
    pub async fn create(&self, partner_id: i32, param: ProductParam) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            partner_id: ActiveValue::Set(partner_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price_cents: ActiveValue::Set(param.price_cents),
            available: ActiveValue::Set(param.available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Gets a product by id, restricted to the given partner.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found in that partner's catalog
    /// - `Ok(None)` - No such product, or it belongs to another partner
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, partner_id: i32, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::PartnerId.eq(partner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Gets several products of one partner by id.
    ///
    /// Ids that do not exist or belong to another partner are silently absent from the
    /// result, so callers compare lengths to detect them.
    pub async fn find_many(&self, partner_id: i32, ids: &[i32]) -> Result<Vec<Product>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::PartnerId.eq(partner_id))
            .filter(entity::product::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Gets a partner's products with pagination, ordered by name.
    ///
    /// # Arguments
    /// - `partner_id` - Partner whose catalog to list
    /// - `only_available` - Hide products that cannot currently be ordered
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of products per page
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_by_partner_paginated(
        &self,
        partner_id: i32,
        only_available: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::PartnerId.eq(partner_id));

        if only_available {
            query = query.filter(entity::product::Column::Available.eq(true));
        }

        let paginator = query
            .order_by_asc(entity::product::Column::Name)
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect();

        Ok((products, total))
    }

    /// Replaces a product's editable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product
    /// - `Ok(None)` - No such product in that partner's catalog
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        partner_id: i32,
        id: i32,
        param: ProductParam,
    ) -> Result<Option<Product>, DbErr> {
        let Some(entity) = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::PartnerId.eq(partner_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.price_cents = ActiveValue::Set(param.price_cents);
        active.available = ActiveValue::Set(param.available);
        let updated = active.update(self.db).await?;

        Ok(Some(Product::from_entity(updated)))
    }

    /// Deletes a product from a partner's catalog.
    ///
    /// # Returns
    /// - `Ok(true)` - Product deleted
    /// - `Ok(false)` - No such product in that partner's catalog
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, partner_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_many()
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::PartnerId.eq(partner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
