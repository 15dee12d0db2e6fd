//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Bearer token decoder for authenticating requests
//! - Subscription registry of live tracking connections

use sea_orm::DatabaseConnection;

use crate::server::{middleware::claims::TokenDecoder, tracking::registry::SubscriptionRegistry};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenDecoder` holds an `Arc` around the decoding key
/// - `SubscriptionRegistry` is an `Arc` around a concurrent map
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Validates bearer tokens issued by the identity provider.
    pub tokens: TokenDecoder,

    /// Order id to live websocket subscribers.
    ///
    /// Lives only as long as the process; every connection removes its own entry
    /// when it closes.
    pub tracking: SubscriptionRegistry,
}

impl AppState {
    /// Creates a new application state with an empty subscription registry.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token decoder configured with the shared secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenDecoder) -> Self {
        Self {
            db,
            tokens,
            tracking: SubscriptionRegistry::new(),
        }
    }
}
