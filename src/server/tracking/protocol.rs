//! JSON text frames of the tracking relay.
//!
//! Inbound frames are tagged by `action`, outbound frames by `type`.

use axum::extract::ws::Message;
use serde::{Deserialize, Serialize};

use crate::model::tracking::LocationDto;

pub const INVALID_MESSAGE: &str = "Invalid message format";
pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const PUBLISH_DENIED: &str = "Not authorized to publish location for this order";
pub const SAVE_FAILED: &str = "Failed to save location";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientMessage {
    Subscribe {
        order_id: i32,
    },
    UpdateLocation {
        order_id: i32,
        courier_id: String,
        latitude: f64,
        longitude: f64,
    },
}

impl ClientMessage {
    /// Parses a text frame, rejecting coordinates outside the WGS84 range.
    pub fn parse(text: &str) -> Option<Self> {
        let message: Self = serde_json::from_str(text).ok()?;

        match &message {
            Self::UpdateLocation {
                latitude,
                longitude,
                ..
            } if !(-90.0..=90.0).contains(latitude) || !(-180.0..=180.0).contains(longitude) => {
                None
            }
            _ => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Location(LocationDto),
    Error { error: String },
}

impl ServerMessage {
    pub fn error(error: &str) -> Self {
        Self::Error {
            error: error.to_string(),
        }
    }

    /// Serializes into a websocket text frame.
    pub fn to_frame(&self) -> Result<Message, serde_json::Error> {
        Ok(Message::Text(serde_json::to_string(self)?.into()))
    }
}
