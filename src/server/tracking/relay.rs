//! Per-connection relay handling.
//!
//! Each websocket runs one reader loop that feeds text frames to a `RelaySession`, and
//! one writer task that drains the connection's outbound queue into the socket sink.
//! Frames of one connection are therefore handled strictly in arrival order.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, StreamExt};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::server::{
    model::{delivery_location::RecordLocationParam, user::User},
    service::tracking::TrackingService,
    state::AppState,
    tracking::{
        protocol::{
            ClientMessage, ServerMessage, INVALID_MESSAGE, ORDER_NOT_FOUND, PUBLISH_DENIED,
            SAVE_FAILED,
        },
        registry::{ConnectionId, ConnectionSender, SubscriptionRegistry},
    },
};

/// How long a closing connection may spend flushing queued frames.
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Subscribed(i32),
    Closed,
}

/// Relay state of a single authenticated connection.
///
/// Dropping the session closes it, so the registry never keeps a handle of a
/// connection whose reader loop has ended.
pub struct RelaySession {
    db: DatabaseConnection,
    registry: SubscriptionRegistry,
    user: User,
    id: ConnectionId,
    sender: ConnectionSender,
    state: SessionState,
}

impl RelaySession {
    pub fn new(
        db: DatabaseConnection,
        registry: SubscriptionRegistry,
        user: User,
        sender: ConnectionSender,
    ) -> Self {
        let id = registry.next_connection_id();

        Self {
            db,
            registry,
            user,
            id,
            sender,
            state: SessionState::Connected,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handles one inbound text frame.
    ///
    /// Failures are reported to this connection as error frames; none of them end
    /// the session.
    pub async fn handle_text(&mut self, text: &str) {
        if self.state == SessionState::Closed {
            return;
        }

        match ClientMessage::parse(text) {
            Some(ClientMessage::Subscribe { order_id }) => self.subscribe(order_id).await,
            Some(ClientMessage::UpdateLocation {
                order_id,
                courier_id,
                latitude,
                longitude,
            }) => {
                self.update_location(RecordLocationParam {
                    order_id,
                    courier_id,
                    latitude,
                    longitude,
                })
                .await
            }
            None => {
                tracing::debug!(connection = self.id, "Rejected malformed tracking frame");
                self.reply(&ServerMessage::error(INVALID_MESSAGE));
            }
        }
    }

    async fn subscribe(&mut self, order_id: i32) {
        let service = TrackingService::new(&self.db);

        match service.can_subscribe(&self.user, order_id).await {
            Ok(true) => {}
            Ok(false) => {
                self.reply(&ServerMessage::error(ORDER_NOT_FOUND));
                return;
            }
            Err(err) => {
                tracing::error!(order_id, error = %err, "Failed to authorize tracking subscription");
                self.reply(&ServerMessage::error(ORDER_NOT_FOUND));
                return;
            }
        }

        if let SessionState::Subscribed(previous) = self.state {
            if previous != order_id {
                self.registry.unsubscribe(previous, self.id);
            }
        }

        self.registry.subscribe(order_id, self.id, self.sender.clone());
        self.state = SessionState::Subscribed(order_id);

        tracing::debug!(
            connection = self.id,
            user_id = %self.user.id,
            order_id,
            "Subscribed to order"
        );

        match service.latest_location(order_id).await {
            Ok(Some(location)) => self.reply(&ServerMessage::Location(location.into_dto())),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(order_id, error = %err, "Failed to load latest location");
            }
        }
    }

    async fn update_location(&mut self, param: RecordLocationParam) {
        let service = TrackingService::new(&self.db);
        let order_id = param.order_id;

        match service
            .can_publish(&self.user, order_id, &param.courier_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(
                    user_id = %self.user.id,
                    order_id,
                    courier_id = %param.courier_id,
                    "Rejected location publish"
                );
                self.reply(&ServerMessage::error(PUBLISH_DENIED));
                return;
            }
            Err(err) => {
                tracing::error!(order_id, error = %err, "Failed to authorize location publish");
                self.reply(&ServerMessage::error(PUBLISH_DENIED));
                return;
            }
        }

        let location = match service.record_location(param).await {
            Ok(location) => location,
            Err(err) => {
                tracing::error!(order_id, error = %err, "Failed to save location");
                self.reply(&ServerMessage::error(SAVE_FAILED));
                return;
            }
        };

        let frame = match ServerMessage::Location(location.into_dto()).to_frame() {
            Ok(frame) => frame,
            Err(err) => {
                tracing::error!(order_id, error = %err, "Failed to encode location frame");
                return;
            }
        };

        let delivered = self.registry.broadcast(order_id, &frame, Some(self.id));
        tracing::trace!(order_id, delivered, "Broadcast location");
    }

    /// Queues a frame for this connection only.
    fn reply(&self, message: &ServerMessage) {
        match message.to_frame() {
            Ok(frame) => {
                let _ = self.sender.send(frame);
            }
            Err(err) => tracing::error!(error = %err, "Failed to encode tracking frame"),
        }
    }

    /// Leaves any subscription and stops processing further frames.
    pub fn close(&mut self) {
        if let SessionState::Subscribed(order_id) = self.state {
            self.registry.unsubscribe(order_id, self.id);
        }
        self.state = SessionState::Closed;
    }
}

impl Drop for RelaySession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Runs an upgraded tracking websocket until the client disconnects.
///
/// Ping, pong, and binary frames are ignored. A close frame, a transport error, or the
/// end of the stream ends the loop and removes the connection from the registry.
pub async fn run_connection(socket: WebSocket, state: AppState, user: User) {
    let (ws_sender, mut ws_receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel::<Message>();

    let mut writer = tokio::spawn(writer_task(ws_sender, rx));
    let mut session = RelaySession::new(state.db.clone(), state.tracking.clone(), user, tx);

    tracing::debug!(connection = session.id(), "Tracking connection opened");

    while let Some(frame) = ws_receiver.next().await {
        match frame {
            Ok(Message::Text(text)) => session.handle_text(text.as_str()).await,
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(connection = session.id(), error = %err, "Tracking socket error");
                break;
            }
        }
    }

    session.close();
    tracing::debug!(connection = session.id(), "Tracking connection closed");

    // Dropping the session releases the last sender, so the writer ends once the
    // queue is flushed.
    drop(session);
    if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut writer)
        .await
        .is_err()
    {
        writer.abort();
    }
}

/// Forwards queued frames into the socket sink until every sender is gone or the sink
/// fails.
pub(super) async fn writer_task<S>(mut sink: S, mut rx: mpsc::UnboundedReceiver<Message>)
where
    S: Sink<Message> + Unpin,
{
    while let Some(message) = rx.recv().await {
        if sink.send(message).await.is_err() {
            break;
        }
    }
}
