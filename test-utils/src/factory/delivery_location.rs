//! Delivery location factory for seeding courier positions.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a location record for `order_id` reported by `courier_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order the courier is delivering
/// - `courier_id` - Reporting courier
/// - `(latitude, longitude)` - Reported position
/// - `recorded_at` - Timestamp stored with the record
pub async fn create_location_at(
    db: &DatabaseConnection,
    order_id: i32,
    courier_id: &str,
    (latitude, longitude): (f64, f64),
    recorded_at: DateTime<Utc>,
) -> Result<entity::delivery_location::Model, DbErr> {
    entity::delivery_location::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        courier_id: ActiveValue::Set(courier_id.to_string()),
        latitude: ActiveValue::Set(latitude),
        longitude: ActiveValue::Set(longitude),
        recorded_at: ActiveValue::Set(recorded_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a location record stamped with the current time.
pub async fn create_location(
    db: &DatabaseConnection,
    order_id: i32,
    courier_id: &str,
    position: (f64, f64),
) -> Result<entity::delivery_location::Model, DbErr> {
    create_location_at(db, order_id, courier_id, position, Utc::now()).await
}
