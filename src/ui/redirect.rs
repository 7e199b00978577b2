//! Timer-driven navigation scheduled by the loading page.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::router::Location;
use crate::ui::events::AppEvent;

/// Spawns auto-navigation timers on the async runtime.
///
/// Each timer gets a fresh generation number; the event it sends carries
/// that number back so the UI can tell which mount it belongs to.
pub struct RedirectScheduler {
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    next_generation: u64,
}

impl RedirectScheduler {
    pub fn new(runtime: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        Self {
            runtime,
            events,
            next_generation: 0,
        }
    }

    pub fn schedule(&mut self, delay: Duration, target: Location) -> PendingRedirect {
        self.next_generation += 1;
        let generation = self.next_generation;
        let events = self.events.clone();

        tracing::debug!(
            generation,
            path = %target,
            delay_ms = delay.as_millis() as u64,
            "auto-navigation scheduled"
        );
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(generation, path = %target, "auto-navigation timer fired");
            let _ = events.send(AppEvent::AutoNavigate { generation, target });
        });

        PendingRedirect { generation, task }
    }
}

/// A scheduled auto-navigation. Dropping it cancels the timer.
pub struct PendingRedirect {
    generation: u64,
    task: JoinHandle<()>,
}

impl PendingRedirect {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for PendingRedirect {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            tracing::debug!(generation = self.generation, "auto-navigation cancelled");
        }
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (RedirectScheduler, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        (RedirectScheduler::new(Handle::current(), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (mut scheduler, rx) = scheduler();
        let pending = scheduler.schedule(Duration::from_secs(3), Location::parse("/home"));

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(1)).await;
        match rx.try_recv() {
            Ok(AppEvent::AutoNavigate { generation, target }) => {
                assert_eq!(generation, pending.generation());
                assert_eq!(target.pathname(), "/home");
            }
            _ => panic!("expected AutoNavigate"),
        }

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_before_delay_cancels() {
        let (mut scheduler, rx) = scheduler();
        let pending = scheduler.schedule(Duration::from_secs(3), Location::parse("/home"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(pending);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn generations_increase() {
        let (mut scheduler, _rx) = scheduler();
        let first = scheduler.schedule(Duration::from_secs(3), Location::root());
        let second = scheduler.schedule(Duration::from_secs(3), Location::root());
        assert!(second.generation() > first.generation());
    }
}
