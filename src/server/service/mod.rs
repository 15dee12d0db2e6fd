//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules such as the order status machine
//! and resource visibility, and translate absent records into `AppError::NotFound`. They
//! work with domain models from `server::model` and never with DTOs.

pub mod order;
pub mod partner;
pub mod product;
pub mod tracking;
pub mod user;

#[cfg(test)]
mod test;
