// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! WebSocket implementation of the realtime channel.
//!
//! Frames are JSON event envelopes:
//!
//! Client -> Server:
//! ```json
//! {"event": "join_case", "data": {"case_id": 5}}
//! {"event": "leave_case", "data": {"case_id": 5}}
//! ```
//!
//! Server -> Client:
//! ```json
//! {"event": "new_message", "data": {"id": 42, "case_id": 5, ...}}
//! {"event": "status", "data": {"message": "Joined case room 5"}}
//! ```
//!
//! Unrecognized inbound frames are skipped with a warning — the backend
//! owns the event vocabulary and may extend it.

use std::time::Duration;

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use secrecy::{ExposeSecret, SecretString};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};

use async_trait::async_trait;
use lexlink_config::model::RealtimeConfig;
use lexlink_core::traits::RealtimeChannel;
use lexlink_core::{ClientEvent, LexlinkError, ServerEvent};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A websocket connection to the backend's realtime endpoint.
///
/// The stored credential is attached to the handshake as a bearer
/// `Authorization` header. Send and receive halves are split so events
/// can be read while a send is in flight.
pub struct WsChannel {
    url: String,
    token: SecretString,
    connect_timeout: Duration,
    writer: Mutex<Option<SplitSink<WsStream, Message>>>,
    reader: Mutex<Option<SplitStream<WsStream>>>,
}

impl WsChannel {
    /// Creates a channel from the `[realtime]` config section and the
    /// session credential.
    pub fn new(config: &RealtimeConfig, token: SecretString) -> Self {
        Self {
            url: config.url.clone(),
            token,
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            writer: Mutex::new(None),
            reader: Mutex::new(None),
        }
    }

    fn not_connected() -> LexlinkError {
        LexlinkError::Channel {
            message: "realtime channel is not connected".into(),
            source: None,
        }
    }

    fn closed() -> LexlinkError {
        LexlinkError::Channel {
            message: "realtime channel closed".into(),
            source: None,
        }
    }
}

impl std::fmt::Debug for WsChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsChannel")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl RealtimeChannel for WsChannel {
    async fn connect(&self) -> Result<(), LexlinkError> {
        let mut request =
            self.url
                .as_str()
                .into_client_request()
                .map_err(|e| LexlinkError::Channel {
                    message: format!("invalid realtime url: {e}"),
                    source: Some(Box::new(e)),
                })?;

        let bearer = format!("Bearer {}", self.token.expose_secret());
        request.headers_mut().insert(
            "Authorization",
            HeaderValue::from_str(&bearer).map_err(|e| LexlinkError::Channel {
                message: format!("credential is not header-safe: {e}"),
                source: Some(Box::new(e)),
            })?,
        );

        let connect = connect_async(request);
        let (stream, response) = tokio::time::timeout(self.connect_timeout, connect)
            .await
            .map_err(|_| LexlinkError::Timeout {
                duration: self.connect_timeout,
            })?
            .map_err(|e| LexlinkError::Channel {
                message: format!("websocket handshake failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(status = %response.status(), url = %self.url, "realtime channel connected");

        let (sink, source) = stream.split();
        *self.writer.lock().await = Some(sink);
        *self.reader.lock().await = Some(source);
        Ok(())
    }

    async fn send(&self, event: ClientEvent) -> Result<(), LexlinkError> {
        let frame = serde_json::to_string(&event)
            .map_err(|e| LexlinkError::Internal(format!("unserializable event: {e}")))?;

        let mut guard = self.writer.lock().await;
        let writer = guard.as_mut().ok_or_else(Self::not_connected)?;
        writer
            .send(Message::Text(frame.into()))
            .await
            .map_err(|e| LexlinkError::Channel {
                message: format!("websocket send failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    async fn next_event(&self) -> Result<ServerEvent, LexlinkError> {
        let mut guard = self.reader.lock().await;
        let reader = guard.as_mut().ok_or_else(Self::not_connected)?;

        loop {
            match reader.next().await {
                None => return Err(Self::closed()),
                Some(Err(e)) => {
                    return Err(LexlinkError::Channel {
                        message: format!("websocket receive failed: {e}"),
                        source: Some(Box::new(e)),
                    });
                }
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => return Ok(event),
                        Err(e) => {
                            warn!(error = %e, "unrecognized realtime frame, skipping");
                            continue;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) => return Err(Self::closed()),
                // Ping/pong are handled by the protocol layer; binary
                // frames are not part of the event contract.
                Some(Ok(_)) => continue,
            }
        }
    }

    async fn close(&self) -> Result<(), LexlinkError> {
        let mut writer_guard = self.writer.lock().await;
        if let Some(writer) = writer_guard.as_mut() {
            // close() emits the close frame and flushes; failures at
            // this point only mean the peer is already gone.
            if let Err(e) = writer.close().await {
                debug!(error = %e, "websocket close handshake failed");
            }
        }
        *writer_guard = None;
        *self.reader.lock().await = None;
        Ok(())
    }
}
