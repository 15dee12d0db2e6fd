//! Partner factory for creating test merchant entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test partners with customizable fields.
pub struct PartnerFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    name: String,
    description: Option<String>,
    address: String,
}

impl<'a> PartnerFactory<'a> {
    /// Creates a new PartnerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Partner {n}"`
    /// - description: `None`
    /// - address: `"{n} Market Street"`
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: owner_id.into(),
            name: format!("Partner {}", id),
            description: None,
            address: format!("{} Market Street", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the partner entity into the database.
    pub async fn build(self) -> Result<entity::partner::Model, DbErr> {
        entity::partner::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            address: ActiveValue::Set(self.address),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a partner owned by `owner_id` with default values.
pub async fn create_partner(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::partner::Model, DbErr> {
    PartnerFactory::new(db, owner_id).build().await
}
