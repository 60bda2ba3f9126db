// src/engine/queue.rs

use tokio::sync::mpsc;
use tracing::debug;

/// One item on the change queue.
///
/// Shutdown travels on the same queue as change events so the dispatcher has
/// a single blocking point. Events already queued ahead of the shutdown are
/// still dispatched before the loop stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// A file at this watch-root-relative path was modified.
    PathChanged(String),
    /// Operator interrupt; the dispatcher should break its loop.
    ShutdownRequested,
}

/// Create the unbounded change queue.
///
/// The sender side is cheap to clone and safe to use from the notify
/// callback thread; the receiver side is owned by the single dispatcher.
pub fn change_queue() -> (ChangeSender, ChangeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChangeSender { tx }, ChangeReceiver { rx })
}

/// Producer half: non-blocking, callable from any thread.
#[derive(Debug, Clone)]
pub struct ChangeSender {
    tx: mpsc::UnboundedSender<QueueEvent>,
}

impl ChangeSender {
    /// Queue a changed path. Never blocks; if the dispatcher is gone the
    /// event is silently dropped (there is nobody left to run anything).
    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        if self.tx.send(QueueEvent::PathChanged(path)).is_err() {
            debug!("change queue closed, dropping event");
        }
    }

    /// Queue a shutdown request behind any already-pending events.
    pub fn push_shutdown(&self) {
        let _ = self.tx.send(QueueEvent::ShutdownRequested);
    }
}

/// Consumer half: strict FIFO, single consumer.
#[derive(Debug)]
pub struct ChangeReceiver {
    rx: mpsc::UnboundedReceiver<QueueEvent>,
}

impl ChangeReceiver {
    /// Block until the next event is available.
    ///
    /// A closed queue (all senders dropped) is reported as shutdown, so the
    /// dispatcher never has to handle "queue gone" separately.
    pub async fn pop(&mut self) -> QueueEvent {
        match self.rx.recv().await {
            Some(event) => event,
            None => QueueEvent::ShutdownRequested,
        }
    }

    /// Non-blocking pop, for tests and polling.
    pub fn try_pop(&mut self) -> Option<QueueEvent> {
        self.rx.try_recv().ok()
    }
}
