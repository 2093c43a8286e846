//! Content surface shown beneath the loading overlay.
//!
//! The loader publishes what it fetched here; the renderer only reads
//! snapshots and decides how dim to draw them.

use std::sync::Arc;

use parking_lot::Mutex;

/// What the content surface currently displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    pub url: String,
    /// HTTP status of the last response, if one arrived.
    pub status: Option<u16>,
    pub bytes: u64,
    /// Leading lines of the page body.
    pub preview: Vec<String>,
}

/// Shared handle to the page snapshot.
#[derive(Debug, Clone, Default)]
pub struct ContentSurface {
    inner: Arc<Mutex<PageSnapshot>>,
}

impl ContentSurface {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PageSnapshot {
                url: url.into(),
                ..PageSnapshot::default()
            })),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.inner.lock().clone()
    }

    pub fn update(&self, apply: impl FnOnce(&mut PageSnapshot)) {
        let mut page = self.inner.lock();
        apply(&mut *page);
    }
}
