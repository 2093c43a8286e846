//! Hand-off of loader events onto the thread that owns the controller.
//!
//! Loaders run on tokio workers while the controller and its observers are
//! pinned to the UI thread. Loaders only ever hold a `LoadEventSender`;
//! the UI loop drains the matching `LoadMailbox` between frames.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::controller::LoadController;
use super::intent::LoadEvent;

/// Create a connected sender/mailbox pair.
pub fn channel() -> (LoadEventSender, LoadMailbox) {
    let (tx, rx) = mpsc::channel();
    (LoadEventSender { tx }, LoadMailbox { rx })
}

/// Thread-safe producer side, cloned into every loader task.
#[derive(Debug, Clone)]
pub struct LoadEventSender {
    tx: Sender<LoadEvent>,
}

impl LoadEventSender {
    /// Queue an event. Returns false once the mailbox has been dropped.
    pub fn send(&self, event: LoadEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer side, owned by the UI thread.
#[derive(Debug)]
pub struct LoadMailbox {
    rx: Receiver<LoadEvent>,
}

impl LoadMailbox {
    /// Apply every queued event to `controller` in arrival order.
    ///
    /// Events the controller rejects are logged and skipped. Returns how
    /// many were applied. Never blocks.
    pub fn drain_into(&self, controller: &mut LoadController) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => match controller.dispatch(event) {
                    Ok(()) => applied += 1,
                    Err(err) => tracing::warn!(error = %err, "Dropped load event"),
                },
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }
}
