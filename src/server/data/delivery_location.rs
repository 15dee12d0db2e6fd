//! Location store for courier positions.
//!
//! Records are append-only. The latest record for an order is the one with the greatest
//! `recorded_at`, with the row id breaking ties between records written in the same instant.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::delivery_location::{DeliveryLocation, RecordLocationParam};

/// Repository providing the location store operations.
pub struct DeliveryLocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeliveryLocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a location record stamped with the current server time.
    ///
    /// # Arguments
    /// - `param` - Order, courier, and full coordinates
    ///
    /// # Returns
    /// - `Ok(DeliveryLocation)` - The stored record including its timestamp
    /// - `Err(DbErr)` - Database error during insert
    pub async fn save(&self, param: RecordLocationParam) -> Result<DeliveryLocation, DbErr> {
        let entity = entity::delivery_location::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            courier_id: ActiveValue::Set(param.courier_id),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            recorded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DeliveryLocation::from_entity(entity))
    }

    /// Gets the most recent location record for an order.
    ///
    /// # Returns
    /// - `Ok(Some(DeliveryLocation))` - Latest record
    /// - `Ok(None)` - No location has been recorded for the order
    /// - `Err(DbErr)` - Database error during query
    pub async fn latest_for_order(&self, order_id: i32) -> Result<Option<DeliveryLocation>, DbErr> {
        let entity = entity::prelude::DeliveryLocation::find()
            .filter(entity::delivery_location::Column::OrderId.eq(order_id))
            .order_by_desc(entity::delivery_location::Column::RecordedAt)
            .order_by_desc(entity::delivery_location::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(DeliveryLocation::from_entity))
    }
}
