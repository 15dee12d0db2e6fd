use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PartnerDto {
    pub id: i32,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePartnerDto {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePartnerDto {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
}
