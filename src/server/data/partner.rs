//! Partner data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::partner::{CreatePartnerParam, Partner, UpdatePartnerParam};

/// Repository providing database operations for partner storefronts.
pub struct PartnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new partner owned by `param.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Partner)` - The created partner
    /// - `Err(DbErr)` - Database error, including an unknown owner
    pub async fn create(&self, param: CreatePartnerParam) -> Result<Partner, DbErr> {
        let entity = entity::partner::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            address: ActiveValue::Set(param.address),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Partner::from_entity(entity))
    }

    /// Gets a partner by id.
    ///
    /// # Returns
    /// - `Ok(Some(Partner))` - Partner found
    /// - `Ok(None)` - No partner with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Partner>, DbErr> {
        let entity = entity::prelude::Partner::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Partner::from_entity))
    }

    /// Gets all partners with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of partners per page
    ///
    /// # Returns
    /// - `Ok((partners, total))` - Partners for the page and total partner count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Partner>, u64), DbErr> {
        let paginator = entity::prelude::Partner::find()
            .order_by_asc(entity::partner::Column::Name)
            .order_by_asc(entity::partner::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let partners = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Partner::from_entity)
            .collect();

        Ok((partners, total))
    }

    /// Gets the ids of every partner owned by a user.
    pub async fn get_ids_by_owner(&self, owner_id: &str) -> Result<Vec<i32>, DbErr> {
        let partners = entity::prelude::Partner::find()
            .filter(entity::partner::Column::OwnerId.eq(owner_id))
            .all(self.db)
            .await?;

        Ok(partners.into_iter().map(|p| p.id).collect())
    }

    /// Updates a partner's storefront details.
    ///
    /// # Returns
    /// - `Ok(Some(Partner))` - Updated partner
    /// - `Ok(None)` - No partner with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePartnerParam,
    ) -> Result<Option<Partner>, DbErr> {
        let Some(entity) = entity::prelude::Partner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.address = ActiveValue::Set(param.address);
        let updated = active.update(self.db).await?;

        Ok(Some(Partner::from_entity(updated)))
    }

    /// Deletes a partner by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Partner deleted
    /// - `Ok(false)` - No partner with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Partner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
