//! Asynchronous persistence flushing.
//!
//! In-memory store state is the source of truth for a session; the durable
//! backend is an eventually-consistent mirror. Each mutation enqueues a full
//! snapshot here and returns immediately. A background task drains the queue
//! in order, so the last snapshot written is always the newest.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::KeyValueStore;

enum FlushMsg {
    /// A serialized snapshot to mirror into the backend.
    Write(String),
    /// Barrier: acknowledged once every earlier write has been attempted.
    Sync(oneshot::Sender<()>),
}

/// Handle to a background writer for one storage key.
///
/// Write failures are logged and swallowed; the backend is best-effort and
/// the store's callers never see persistence errors. Dropping the handle
/// shuts the writer down after the queue drains.
pub struct Flusher {
    tx: mpsc::UnboundedSender<FlushMsg>,
}

impl Flusher {
    /// Spawn a writer task that mirrors snapshots into `storage` under `key`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (tx, mut rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                match msg {
                    FlushMsg::Write(snapshot) => {
                        if let Err(err) = storage.set_item(&key, &snapshot).await {
                            warn!(key = %key, error = %err, "persist write failed; dropping snapshot");
                        }
                    }
                    FlushMsg::Sync(ack) => {
                        // Receiver may have given up waiting; that's fine.
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self { tx }
    }

    /// Queue a snapshot for writing. Fire-and-forget.
    pub fn write(&self, snapshot: String) {
        if self.tx.send(FlushMsg::Write(snapshot)).is_err() {
            warn!("flush writer stopped; dropping snapshot");
        }
    }

    /// Wait until every snapshot queued before this call has been attempted.
    ///
    /// Queue order guarantees the barrier is processed after all earlier
    /// writes. Primarily for tests and orderly shutdown.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(FlushMsg::Sync(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}
