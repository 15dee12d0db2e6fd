use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::extract::ws::Message;
use dashmap::DashMap;
use tokio::sync::mpsc;

/// Sending half of a connection's outbound queue. The connection's writer task drains
/// the receiving half into the socket.
pub type ConnectionSender = mpsc::UnboundedSender<Message>;

/// Process-unique handle of one websocket connection.
pub type ConnectionId = u64;

/// Order id to the live connections subscribed to it.
///
/// An entry exists only while it has at least one subscriber. Each connection removes
/// itself when it unsubscribes or closes, so a handle in the map always belongs to a
/// connection whose reader loop is still running.
#[derive(Clone, Default)]
pub struct SubscriptionRegistry {
    orders: Arc<DashMap<i32, HashMap<ConnectionId, ConnectionSender>>>,
    next_id: Arc<AtomicU64>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a handle for a new connection.
    pub fn next_connection_id(&self) -> ConnectionId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Adds a connection to an order's subscribers, creating the entry if needed.
    ///
    /// Subscribing the same connection twice leaves a single subscription.
    pub fn subscribe(&self, order_id: i32, connection: ConnectionId, sender: ConnectionSender) {
        self.orders
            .entry(order_id)
            .or_default()
            .insert(connection, sender);
    }

    /// Removes a connection from an order and drops the entry once it is empty.
    pub fn unsubscribe(&self, order_id: i32, connection: ConnectionId) {
        if let Some(mut subscribers) = self.orders.get_mut(&order_id) {
            subscribers.remove(&connection);
        }

        self.orders
            .remove_if(&order_id, |_, subscribers| subscribers.is_empty());
    }

    /// Queues `message` for every open subscriber of an order except `exclude`.
    ///
    /// Subscribers whose writer has already gone away are skipped; their own close
    /// removes them from the registry.
    ///
    /// # Returns
    /// - `usize` - Number of connections the frame was queued for
    pub fn broadcast(&self, order_id: i32, message: &Message, exclude: Option<ConnectionId>) -> usize {
        let Some(subscribers) = self.orders.get(&order_id) else {
            return 0;
        };

        let mut queued = 0;
        for (id, sender) in subscribers.iter() {
            if Some(*id) == exclude || sender.is_closed() {
                continue;
            }
            if sender.send(message.clone()).is_ok() {
                queued += 1;
            }
        }

        queued
    }

    /// Number of orders that currently have subscribers.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of connections subscribed to an order.
    pub fn subscriber_count(&self, order_id: i32) -> usize {
        self.orders
            .get(&order_id)
            .map(|subscribers| subscribers.len())
            .unwrap_or(0)
    }
}
