use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Notify;

use crate::ui::events::AppEvent;

/// Shared shutdown flag with async wake-up.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Subscribe before checking the flag, otherwise a signal() between the
        // check and the await would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

/// Forward SIGINT/SIGTERM to the UI loop as [`AppEvent::Shutdown`].
///
/// The task ends on its own once `shutdown` is signalled.
pub fn spawn_signal_listener(
    runtime: &Handle,
    shutdown: ShutdownHandle,
    events: mpsc::Sender<AppEvent>,
) {
    runtime.spawn(async move {
        tokio::select! {
            _ = os_signal() => {
                tracing::info!("termination signal received");
                let _ = events.send(AppEvent::Shutdown);
            }
            _ = shutdown.wait() => {}
        }
    });
}

#[cfg(unix)]
async fn os_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let Ok(mut term) = signal(SignalKind::terminate()) else {
        let _ = tokio::signal::ctrl_c().await;
        return;
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn os_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_sticky_and_shared() {
        let shutdown = ShutdownHandle::new();
        let clone = shutdown.clone();
        assert!(!clone.is_shutting_down());
        shutdown.signal();
        shutdown.signal();
        assert!(clone.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_signal() {
        let shutdown = ShutdownHandle::new();
        let waiter = shutdown.clone();
        let task = tokio::spawn(async move { waiter.wait().await });
        tokio::task::yield_now().await;
        shutdown.signal();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait should finish")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signalled() {
        let shutdown = ShutdownHandle::new();
        shutdown.signal();
        tokio::time::timeout(Duration::from_millis(100), shutdown.wait())
            .await
            .expect("already signalled");
    }
}
