//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the marketplace: REST endpoints for
//! users, partners, catalogs and orders, plus the websocket relay that streams courier
//! positions to everyone following an order. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction and authorization guards
//! - **Tracking** (`tracking/`) - Websocket relay and its in-process subscription registry
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token decoder, subscription registry)
//! - **Startup** (`startup`) - Database connection, tracing, and router assembly
//! - **Router** (`router`) - Route registration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** validates the bearer token and resolves the caller
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response
//!
//! Tracking websockets leave this flow after the upgrade and are driven by
//! `tracking::relay` until the client disconnects.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod tracking;
pub mod util;
