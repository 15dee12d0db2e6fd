use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of results with the metadata needed to render pagination controls.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
