//! Live delivery tracking relay.
//!
//! Couriers publish positions over a websocket and every other connection subscribed to
//! the same order receives them. The pieces are:
//!
//! - `registry` - in-process map of order id to subscribed connections
//! - `protocol` - JSON frames exchanged with clients
//! - `relay` - per-connection state machine and socket loop

pub mod protocol;
pub mod registry;
pub mod relay;
