//! Partner (merchant) domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::partner::{CreatePartnerDto, PartnerDto, UpdatePartnerDto};

/// Merchant storefront owned by a user with the partner role.
#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: i32,
    /// User who manages the storefront and its catalog.
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Pickup address couriers collect orders from.
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Partner {
    /// Converts an entity model to a partner domain model at the repository boundary.
    pub fn from_entity(entity: entity::partner::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PartnerDto {
        PartnerDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            address: self.address,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a partner.
#[derive(Debug, Clone)]
pub struct CreatePartnerParam {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
}

impl CreatePartnerParam {
    pub fn from_dto(owner_id: String, dto: CreatePartnerDto) -> Self {
        Self {
            owner_id,
            name: dto.name,
            description: dto.description,
            address: dto.address,
        }
    }
}

/// Parameters for updating a partner's storefront details.
#[derive(Debug, Clone)]
pub struct UpdatePartnerParam {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
}

impl From<UpdatePartnerDto> for UpdatePartnerParam {
    fn from(dto: UpdatePartnerDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            address: dto.address,
        }
    }
}
