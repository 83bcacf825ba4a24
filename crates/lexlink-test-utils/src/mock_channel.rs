// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock realtime channel for deterministic coordinator tests.
//!
//! `MockChannel` implements `RealtimeChannel` with injectable inbound
//! events and captured outbound events for assertion in tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use lexlink_core::traits::RealtimeChannel;
use lexlink_core::{ClientEvent, LexlinkError, ServerEvent};

/// A mock realtime channel for testing.
///
/// Provides two queues:
/// - **inbound**: Events injected via `inject_event()` are returned by `next_event()`
/// - **sent**: Events passed to `send()` are captured and retrievable via `sent_events()`
#[derive(Default)]
pub struct MockChannel {
    inbound: Arc<Mutex<VecDeque<ServerEvent>>>,
    sent: Arc<Mutex<Vec<ClientEvent>>>,
    notify: Arc<Notify>,
    connected: AtomicBool,
    closed: AtomicBool,
}

impl MockChannel {
    /// Create a new mock channel with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject an inbound event into the receive queue.
    ///
    /// The next call to `next_event()` will return this event.
    pub async fn inject_event(&self, event: ServerEvent) {
        self.inbound.lock().await.push_back(event);
        self.notify.notify_one();
    }

    /// All events that were sent through `send()`, in order.
    pub async fn sent_events(&self) -> Vec<ClientEvent> {
        self.sent.lock().await.clone()
    }

    /// Clear captured sent events.
    pub async fn clear_sent(&self) {
        self.sent.lock().await.clear();
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Handles shared between the test body and the coordinator owning
    /// the channel: inject events and inspect sends without holding the
    /// channel itself.
    pub fn handles(&self) -> MockChannelHandles {
        MockChannelHandles {
            inbound: Arc::clone(&self.inbound),
            sent: Arc::clone(&self.sent),
            notify: Arc::clone(&self.notify),
        }
    }
}

/// Cloneable injection/inspection handles for a [`MockChannel`].
#[derive(Clone)]
pub struct MockChannelHandles {
    inbound: Arc<Mutex<VecDeque<ServerEvent>>>,
    sent: Arc<Mutex<Vec<ClientEvent>>>,
    notify: Arc<Notify>,
}

impl MockChannelHandles {
    pub async fn inject_event(&self, event: ServerEvent) {
        self.inbound.lock().await.push_back(event);
        self.notify.notify_one();
    }

    pub async fn sent_events(&self) -> Vec<ClientEvent> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl RealtimeChannel for MockChannel {
    async fn connect(&self) -> Result<(), LexlinkError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send(&self, event: ClientEvent) -> Result<(), LexlinkError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(LexlinkError::Channel {
                message: "mock channel closed".into(),
                source: None,
            });
        }
        self.sent.lock().await.push(event);
        Ok(())
    }

    async fn next_event(&self) -> Result<ServerEvent, LexlinkError> {
        loop {
            // Try to pop from the queue.
            {
                let mut queue = self.inbound.lock().await;
                if let Some(event) = queue.pop_front() {
                    return Ok(event);
                }
            }
            if self.closed.load(Ordering::SeqCst) {
                return Err(LexlinkError::Channel {
                    message: "mock channel closed".into(),
                    source: None,
                });
            }
            // Wait for a new injection.
            self.notify.notified().await;
        }
    }

    async fn close(&self) -> Result<(), LexlinkError> {
        self.closed.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexlink_core::CaseId;

    #[tokio::test]
    async fn next_event_returns_injected_events_in_order() {
        let channel = MockChannel::new();
        channel
            .inject_event(ServerEvent::Status {
                message: "first".into(),
            })
            .await;
        channel
            .inject_event(ServerEvent::Status {
                message: "second".into(),
            })
            .await;

        match channel.next_event().await.unwrap() {
            ServerEvent::Status { message } => assert_eq!(message, "first"),
            other => panic!("unexpected event {other:?}"),
        }
        match channel.next_event().await.unwrap() {
            ServerEvent::Status { message } => assert_eq!(message, "second"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_captures_outbound_events() {
        let channel = MockChannel::new();
        channel
            .send(ClientEvent::JoinCase { case_id: CaseId(5) })
            .await
            .unwrap();

        let sent = channel.sent_events().await;
        assert_eq!(sent, vec![ClientEvent::JoinCase { case_id: CaseId(5) }]);
    }

    #[tokio::test]
    async fn next_event_waits_for_injection() {
        let channel = Arc::new(MockChannel::new());
        let handles = channel.handles();

        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
            handles
                .inject_event(ServerEvent::Status {
                    message: "delayed".into(),
                })
                .await;
        });

        let event = tokio::time::timeout(
            tokio::time::Duration::from_secs(2),
            channel.next_event(),
        )
        .await
        .expect("next_event timed out")
        .unwrap();

        assert!(matches!(event, ServerEvent::Status { .. }));
    }

    #[tokio::test]
    async fn closed_channel_errors_senders_and_receivers() {
        let channel = MockChannel::new();
        channel.close().await.unwrap();

        assert!(
            channel
                .send(ClientEvent::LeaveCase { case_id: CaseId(1) })
                .await
                .is_err()
        );
        assert!(channel.next_event().await.is_err());
    }
}
