//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    partner_id: i32,
    name: String,
    description: Option<String>,
    price_cents: i64,
    available: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {n}"`
    /// - price_cents: `1250`
    /// - available: `true`
    pub fn new(db: &'a DatabaseConnection, partner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            partner_id,
            name: format!("Product {}", id),
            description: None,
            price_cents: 1250,
            available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            partner_id: ActiveValue::Set(self.partner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price_cents: ActiveValue::Set(self.price_cents),
            available: ActiveValue::Set(self.available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available product for `partner_id` with default values.
pub async fn create_product(
    db: &DatabaseConnection,
    partner_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, partner_id).build().await
}
