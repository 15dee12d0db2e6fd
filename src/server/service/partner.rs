//! Partner service for storefront management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, partner::PartnerRepository},
    error::AppError,
    model::{
        pagination::Page,
        partner::{CreatePartnerParam, Partner, UpdatePartnerParam},
    },
};

pub struct PartnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a partner owned by `param.owner_id`.
    ///
    /// # Returns
    /// - `Ok(Partner)` - Created partner
    /// - `Err(AppError::BadRequest)` - Blank name or address
    pub async fn create(&self, param: CreatePartnerParam) -> Result<Partner, AppError> {
        validate_details(&param.name, &param.address)?;

        let partner = PartnerRepository::new(self.db).create(param).await?;

        Ok(partner)
    }

    /// Gets a partner by id.
    ///
    /// # Returns
    /// - `Ok(Partner)` - Partner found
    /// - `Err(AppError::NotFound)` - Unknown partner
    pub async fn get_by_id(&self, id: i32) -> Result<Partner, AppError> {
        PartnerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner not found".to_string()))
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Partner>, AppError> {
        let (partners, total) = PartnerRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Page::new(partners, total, page, per_page))
    }

    /// Updates a partner's storefront details.
    ///
    /// # Returns
    /// - `Ok(Partner)` - Updated partner
    /// - `Err(AppError::BadRequest)` - Blank name or address
    /// - `Err(AppError::NotFound)` - Unknown partner
    pub async fn update(&self, id: i32, param: UpdatePartnerParam) -> Result<Partner, AppError> {
        validate_details(&param.name, &param.address)?;

        PartnerRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner not found".to_string()))
    }

    /// Deletes a partner together with its catalog.
    ///
    /// # Returns
    /// - `Ok(())` - Partner deleted
    /// - `Err(AppError::Conflict)` - The partner already has orders
    /// - `Err(AppError::NotFound)` - Unknown partner
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if OrderRepository::new(self.db).partner_has_orders(id).await? {
            return Err(AppError::Conflict(
                "Partner has existing orders and cannot be deleted".to_string(),
            ));
        }

        if !PartnerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Partner not found".to_string()));
        }

        Ok(())
    }
}

fn validate_details(name: &str, address: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    if address.trim().is_empty() {
        return Err(AppError::BadRequest("Address must not be empty".to_string()));
    }
    Ok(())
}
