// Lifetime of the WebSocket subscription connections.
//
// The HTTP server hands every upgraded connection to `serve_connection`. On
// shutdown the server calls `close`, which ends every running connection and
// refuses new ones, then waits on `drained`.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Notify, watch};

#[derive(Clone)]
pub struct SubscriptionServer {
    inner: Arc<Inner>,
}

struct Inner {
    closed: watch::Sender<bool>,
    active: AtomicUsize,
    idle: Notify,
}

struct ConnectionGuard {
    inner: Arc<Inner>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        if self.inner.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}

impl Default for SubscriptionServer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionServer {
    pub fn new() -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                closed,
                active: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.inner.closed.borrow()
    }

    pub fn active_connections(&self) -> usize {
        self.inner.active.load(Ordering::SeqCst)
    }

    /// Stops every running connection and refuses new ones. Idempotent.
    pub fn close(&self) {
        if !self.inner.closed.send_replace(true) {
            tracing::info!(
                active = self.active_connections(),
                "closing subscription server"
            );
        }
    }

    /// Resolves once `close` has been called.
    pub async fn closed(&self) {
        let mut receiver = self.inner.closed.subscribe();
        // The sender lives in `inner`, so the channel cannot close under us.
        let _ = receiver.wait_for(|closed| *closed).await;
    }

    /// Resolves once no connection is running.
    pub async fn drained(&self) {
        loop {
            let idle = self.inner.idle.notified();
            if self.active_connections() == 0 {
                return;
            }
            idle.await;
        }
    }

    /// Runs one connection until it finishes on its own or the server closes.
    pub async fn serve_connection<F>(&self, connection: F)
    where
        F: Future<Output = ()>,
    {
        let Some(_guard) = self.track() else {
            tracing::debug!("subscription server closed, dropping connection");
            return;
        };

        tokio::select! {
            _ = connection => {
                tracing::debug!("subscription connection finished");
            }
            _ = self.closed() => {
                tracing::debug!("subscription connection closed by shutdown");
            }
        }
    }

    fn track(&self) -> Option<ConnectionGuard> {
        if self.is_closed() {
            return None;
        }
        self.inner.active.fetch_add(1, Ordering::SeqCst);
        Some(ConnectionGuard {
            inner: self.inner.clone(),
        })
    }
}
