use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};
use tokio::sync::Notify;

/// Owns teardown of the splash screen.
///
/// OS signals only raise a flag; the UI loop polls it and calls `signal`,
/// which wakes every `ShutdownHandle::wait`.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    os_signal: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            os_signal: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Route SIGINT and SIGTERM into `os_signal_received`.
    pub fn register_os_signals(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.os_signal))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.os_signal))?;
        Ok(())
    }

    pub fn os_signal_received(&self) -> bool {
        self.os_signal.load(Ordering::SeqCst)
    }

    /// Start teardown. Only the first call notifies.
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutting down splash screen");
            self.notify.notify_waiters();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register interest before reading the flag, otherwise a signal in
        // between would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_visible_through_handles() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        assert!(!handle.is_shutting_down());

        coordinator.signal();
        coordinator.signal();

        assert!(coordinator.is_shutting_down());
        assert!(handle.is_shutting_down());
        assert!(!coordinator.os_signal_received());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();

        let waiter = tokio::spawn(async move { handle.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        coordinator.signal();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should finish")
            .expect("waiter should not panic");
    }

    #[tokio::test]
    async fn wait_after_signal_returns_immediately() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.signal();
        tokio::time::timeout(Duration::from_secs(1), coordinator.handle().wait())
            .await
            .expect("already signalled");
    }
}
