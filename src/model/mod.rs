//! API data transfer objects.
//!
//! Request and response bodies exchanged over the HTTP API. Server-side domain models
//! are converted into these at the controller boundary.

pub mod api;
pub mod order;
pub mod pagination;
pub mod partner;
pub mod product;
pub mod tracking;
pub mod user;
