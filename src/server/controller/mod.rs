//! HTTP request handlers.
//!
//! Controllers authenticate the caller, check access through `AuthGuard`, convert DTOs
//! into service parameters, and convert domain models back into DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

pub mod admin;
pub mod order;
pub mod partner;
pub mod product;
pub mod tracking;
pub mod user;

/// Query parameters shared by every paginated listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
