//! Order factory for creating test orders and their items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Items added through `item()` are inserted after the order and the order total is
/// computed from them.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, &customer.id, partner.id)
///     .item(product.id, 2, product.price_cents)
///     .courier(&courier.id)
///     .status("accepted")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: String,
    partner_id: i32,
    courier_id: Option<String>,
    status: String,
    delivery_address: String,
    items: Vec<(i32, i32, i64)>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - courier: none
    /// - status: `"pending"`
    /// - delivery_address: `"1 Test Lane"`
    /// - items: none
    pub fn new(db: &'a DatabaseConnection, customer_id: impl Into<String>, partner_id: i32) -> Self {
        Self {
            db,
            customer_id: customer_id.into(),
            partner_id,
            courier_id: None,
            status: "pending".to_string(),
            delivery_address: "1 Test Lane".to_string(),
            items: Vec::new(),
        }
    }

    pub fn courier(mut self, courier_id: impl Into<String>) -> Self {
        self.courier_id = Some(courier_id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = address.into();
        self
    }

    /// Adds an item line of `quantity` units of `product_id` at `unit_price_cents`.
    pub fn item(mut self, product_id: i32, quantity: i32, unit_price_cents: i64) -> Self {
        self.items.push((product_id, quantity, unit_price_cents));
        self
    }

    /// Builds and inserts the order and its items into the database.
    pub async fn build(self) -> Result<entity::customer_order::Model, DbErr> {
        let now = Utc::now();
        let total_cents = self
            .items
            .iter()
            .map(|(_, quantity, price)| *quantity as i64 * price)
            .sum();

        let order = entity::customer_order::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            partner_id: ActiveValue::Set(self.partner_id),
            courier_id: ActiveValue::Set(self.courier_id),
            status: ActiveValue::Set(self.status),
            delivery_address: ActiveValue::Set(self.delivery_address),
            total_cents: ActiveValue::Set(total_cents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (product_id, quantity, unit_price_cents) in self.items {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product_id),
                quantity: ActiveValue::Set(quantity),
                unit_price_cents: ActiveValue::Set(unit_price_cents),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates a pending order without items.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: &str,
    partner_id: i32,
) -> Result<entity::customer_order::Model, DbErr> {
    OrderFactory::new(db, customer_id, partner_id).build().await
}
