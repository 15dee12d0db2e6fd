//! Courier location records.

use chrono::{DateTime, Utc};

use crate::model::tracking::LocationDto;

/// A single courier position for an order. Records are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryLocation {
    pub order_id: i32,
    pub courier_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Server time at which the position was accepted.
    pub recorded_at: DateTime<Utc>,
}

impl DeliveryLocation {
    pub fn from_entity(entity: entity::delivery_location::Model) -> Self {
        Self {
            order_id: entity.order_id,
            courier_id: entity.courier_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            order_id: self.order_id,
            courier_id: self.courier_id,
            latitude: self.latitude,
            longitude: self.longitude,
            timestamp: self.recorded_at,
        }
    }
}

/// Parameters for appending a location record.
#[derive(Debug, Clone)]
pub struct RecordLocationParam {
    pub order_id: i32,
    pub courier_id: String,
    pub latitude: f64,
    pub longitude: f64,
}
