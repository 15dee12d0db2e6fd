//! Catalog product domain models and parameters.

use crate::model::product::{CreateProductDto, ProductDto, UpdateProductDto};

/// Item sold by a partner. Prices are kept in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub partner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    /// Unavailable products stay in the catalog but cannot be ordered.
    pub available: bool,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            partner_id: entity.partner_id,
            name: entity.name,
            description: entity.description,
            price_cents: entity.price_cents,
            available: entity.available,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            partner_id: self.partner_id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            available: self.available,
        }
    }
}

/// Parameters for creating or replacing a product's fields.
#[derive(Debug, Clone)]
pub struct ProductParam {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub available: bool,
}

impl From<CreateProductDto> for ProductParam {
    fn from(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price_cents: dto.price_cents,
            available: dto.available,
        }
    }
}

impl From<UpdateProductDto> for ProductParam {
    fn from(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price_cents: dto.price_cents,
            available: dto.available,
        }
    }
}
