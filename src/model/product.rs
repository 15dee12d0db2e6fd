use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub partner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub available: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default = "default_available")]
    pub available: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub available: bool,
}

fn default_available() -> bool {
    true
}
