//! Product service for partner catalogs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, partner::PartnerRepository, product::ProductRepository},
    error::AppError,
    model::{
        pagination::Page,
        product::{Product, ProductParam},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a product to a partner's catalog.
    ///
    /// # Returns
    /// - `Ok(Product)` - Created product
    /// - `Err(AppError::BadRequest)` - Blank name or non-positive price
    pub async fn create(&self, partner_id: i32, param: ProductParam) -> Result<Product, AppError> {
        validate(&param)?;

        let product = ProductRepository::new(self.db)
            .create(partner_id, param)
            .await?;

        Ok(product)
    }

    /// Lists a partner's catalog ordered by name.
    ///
    /// # Arguments
    /// - `partner_id` - Partner whose catalog to list
    /// - `include_unavailable` - Whether unavailable products are listed too
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Products per page
    ///
    /// # Returns
    /// - `Ok(Page<Product>)` - Products for the page
    /// - `Err(AppError::NotFound)` - Unknown partner
    pub async fn get_catalog(
        &self,
        partner_id: i32,
        include_unavailable: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Product>, AppError> {
        if PartnerRepository::new(self.db)
            .find_by_id(partner_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Partner not found".to_string()));
        }

        let (products, total) = ProductRepository::new(self.db)
            .get_by_partner_paginated(partner_id, !include_unavailable, page, per_page)
            .await?;

        Ok(Page::new(products, total, page, per_page))
    }

    /// Replaces a product's fields.
    ///
    /// # Returns
    /// - `Ok(Product)` - Updated product
    /// - `Err(AppError::BadRequest)` - Blank name or non-positive price
    /// - `Err(AppError::NotFound)` - No such product in the partner's catalog
    pub async fn update(
        &self,
        partner_id: i32,
        id: i32,
        param: ProductParam,
    ) -> Result<Product, AppError> {
        validate(&param)?;

        ProductRepository::new(self.db)
            .update(partner_id, id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Removes a product from the catalog.
    ///
    /// Products that appear on orders are kept for the order history; mark them
    /// unavailable instead.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(AppError::Conflict)` - Product appears on an order
    /// - `Err(AppError::NotFound)` - No such product in the partner's catalog
    pub async fn delete(&self, partner_id: i32, id: i32) -> Result<(), AppError> {
        let product_repo = ProductRepository::new(self.db);

        if product_repo.find_by_id(partner_id, id).await?.is_none() {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        if OrderRepository::new(self.db).product_is_ordered(id).await? {
            return Err(AppError::Conflict(
                "Product appears on existing orders; mark it unavailable instead".to_string(),
            ));
        }

        product_repo.delete(partner_id, id).await?;

        Ok(())
    }
}

fn validate(param: &ProductParam) -> Result<(), AppError> {
    if param.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    if param.price_cents <= 0 {
        return Err(AppError::BadRequest(
            "Price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
