//! Live enquiry feed over WebSocket
//!
//! GET /api/admin/enquiries/ws?token=<JWT>
//!
//! On connect and after every inquiry change the session pushes the full
//! enquiry list, newest first. Client messages are ignored apart from close.

use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use dashmap::DashMap;
use futures::{Sink, SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::Inquiry;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::Duration;

use crate::auth::admin_auth::{token_error, verify_token};
use crate::db;
use crate::state::AppState;

/// Maximum concurrent feed connections per admin
const MAX_FEED_WS_PER_ADMIN: usize = 5;

#[derive(Deserialize)]
pub struct WsAuthQuery {
    token: String,
}

/// Message pushed to the client
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FeedMessage<'a> {
    Snapshot { enquiries: &'a [Inquiry] },
}

/// Holds one of the admin's connection slots until dropped
struct ConnectionSlot {
    connections: Arc<DashMap<String, AtomicUsize>>,
    email: String,
}

impl ConnectionSlot {
    fn acquire(connections: &Arc<DashMap<String, AtomicUsize>>, email: &str) -> Result<Self, usize> {
        let counter = connections
            .entry(email.to_string())
            .or_insert_with(|| AtomicUsize::new(0));
        let prev = counter.fetch_add(1, Ordering::SeqCst);
        if prev >= MAX_FEED_WS_PER_ADMIN {
            counter.fetch_sub(1, Ordering::SeqCst);
            return Err(prev);
        }
        Ok(Self {
            connections: connections.clone(),
            email: email.to_string(),
        })
    }
}

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        if let Some(counter) = self.connections.get(&self.email) {
            counter.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

/// GET /api/admin/enquiries/ws?token=<JWT>
pub async fn handle_enquiry_ws(
    State(state): State<AppState>,
    Query(query): Query<WsAuthQuery>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let claims = verify_token(&query.token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("Enquiry WS JWT validation failed: {e}");
        token_error(&e)
    })?;

    let email = claims.sub;
    let slot = ConnectionSlot::acquire(&state.feed_connections, &email).map_err(|prev| {
        AppError::with_message(
            ErrorCode::TooManyAttempts,
            format!("Too many live feed connections ({prev}/{MAX_FEED_WS_PER_ADMIN})"),
        )
    })?;

    Ok(ws.on_upgrade(move |socket| enquiry_ws_session(socket, state, email, slot)))
}

async fn enquiry_ws_session(socket: WebSocket, state: AppState, email: String, _slot: ConnectionSlot) {
    let (mut sink, mut stream) = socket.split();

    // Subscribe before the first read so no change can slip in between
    let mut feed = state.inquiry_feed.subscribe();
    tracing::info!(
        email = %email,
        listeners = state.inquiry_feed.active_subscriptions(),
        "Enquiry WS connected"
    );

    if push_snapshot(&state, &mut sink).await.is_err() {
        return;
    }

    let mut ping_interval = tokio::time::interval(Duration::from_secs(30));
    ping_interval.tick().await;

    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if sink.send(Message::Ping(vec![].into())).await.is_err() {
                    break;
                }
            }

            event = feed.recv() => {
                match event {
                    Ok(change) => {
                        tracing::debug!(inquiry_id = change.inquiry_id, kind = ?change.kind, "Pushing enquiry snapshot");
                        if push_snapshot(&state, &mut sink).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(email = %email, lagged = n, "Enquiry feed lagged, resending full snapshot");
                        feed.resync();
                        if push_snapshot(&state, &mut sink).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(_)) => break,
                    _ => {}
                }
            }
        }
    }

    drop(feed);
    tracing::info!(
        email = %email,
        listeners = state.inquiry_feed.active_subscriptions(),
        "Enquiry WS disconnected"
    );
}

/// Reload and send the ordered enquiry list. A failed read is logged and
/// skipped; only a dead socket ends the session.
async fn push_snapshot<S>(state: &AppState, sink: &mut S) -> Result<(), ()>
where
    S: Sink<Message> + Unpin,
{
    let enquiries = match db::inquiries::list_all(&state.pool).await {
        Ok(list) => list,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load enquiry snapshot");
            return Ok(());
        }
    };
    let json = match serde_json::to_string(&FeedMessage::Snapshot {
        enquiries: &enquiries,
    }) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode enquiry snapshot");
            return Ok(());
        }
    };
    sink.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_slots_are_capped_and_released() {
        let connections = Arc::new(DashMap::new());
        let slots: Vec<_> = (0..MAX_FEED_WS_PER_ADMIN)
            .map(|_| ConnectionSlot::acquire(&connections, "ops@nexus.io").unwrap())
            .collect();

        assert!(ConnectionSlot::acquire(&connections, "ops@nexus.io").is_err());
        // Other admins have their own budget
        assert!(ConnectionSlot::acquire(&connections, "ceo@nexus.io").is_ok());

        drop(slots);
        assert_eq!(
            connections.get("ops@nexus.io").unwrap().load(Ordering::SeqCst),
            0
        );
        assert!(ConnectionSlot::acquire(&connections, "ops@nexus.io").is_ok());
    }

    #[test]
    fn snapshot_message_shape() {
        let json = serde_json::to_value(FeedMessage::Snapshot { enquiries: &[] }).unwrap();
        assert_eq!(json["type"], "snapshot");
        assert!(json["enquiries"].as_array().unwrap().is_empty());
    }
}
