//! The single-writer gateway service.
//!
//! The store is not designed for concurrent mutation, so the gateway moves
//! it into one spawned task and feeds it requests off an mpsc channel. That
//! channel is the entire serialization boundary: a call that checks a
//! uniqueness or existence condition and then mutates runs as one
//! indivisible step, because no other call can reach the store in between.
//!
//! Completion order across concurrent calls from one handle is not
//! guaranteed; callers needing read-after-write consistency await the write
//! before issuing the read. There is no cancellation and no timeout - an
//! accepted invocation runs to completion.

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use roster_store::RecordStore;

use crate::dispatch::dispatch;
use crate::failure::Failure;

/// The boundary outcome of one call: a value or a structured failure.
pub type Reply = Result<Value, Failure>;

/// The gateway service task is no longer running.
///
/// This is a fault of the host wiring (the task panicked or was shut
/// down), not a boundary failure the presenter is expected to handle.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("gateway service is no longer running")]
pub struct GatewayClosed;

struct Envelope {
    method: String,
    args: Vec<Value>,
    reply: oneshot::Sender<Reply>,
}

/// The controller-side service owning the record store.
pub struct Gateway {
    store: RecordStore,
    rx: mpsc::Receiver<Envelope>,
}

impl Gateway {
    /// Create a service/handle pair without starting the service, for
    /// hosts that want to drive [`run`](Self::run) on their own task.
    /// `capacity` bounds the number of queued outstanding calls.
    pub fn channel(store: RecordStore, capacity: usize) -> (Gateway, GatewayHandle) {
        let (tx, rx) = mpsc::channel(capacity);
        (Gateway { store, rx }, GatewayHandle { tx })
    }

    /// Move `store` into a spawned task and return the presenter-side
    /// handle. The request queue holds 64 outstanding calls.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(store: RecordStore) -> GatewayHandle {
        let (gateway, handle) = Self::channel(store, 64);
        tokio::spawn(gateway.run());
        handle
    }

    /// Process requests until every handle is dropped.
    pub async fn run(mut self) {
        while let Some(envelope) = self.rx.recv().await {
            tracing::debug!(method = %envelope.method, "dispatching");
            let reply = dispatch(&mut self.store, &envelope.method, &envelope.args);
            if let Err(failure) = &reply {
                tracing::debug!(kind = ?failure.kind, "call failed: {}", failure.description);
            }
            // The caller may have dropped its future; nothing to do then.
            let _ = envelope.reply.send(reply);
        }
        tracing::debug!("all gateway handles dropped, shutting down");
    }
}

/// Presenter-side endpoint. Cheap to clone; many calls may be outstanding.
#[derive(Clone)]
pub struct GatewayHandle {
    tx: mpsc::Sender<Envelope>,
}

impl GatewayHandle {
    /// Submit a named call and await its outcome.
    ///
    /// The outer `Result` reports whether the service is still running; the
    /// inner [`Reply`] is the boundary outcome of the call itself.
    pub async fn invoke(
        &self,
        method: impl Into<String>,
        args: Vec<Value>,
    ) -> Result<Reply, GatewayClosed> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let envelope = Envelope {
            method: method.into(),
            args,
            reply: reply_tx,
        };
        self.tx.send(envelope).await.map_err(|_| GatewayClosed)?;
        reply_rx.await.map_err(|_| GatewayClosed)
    }
}
