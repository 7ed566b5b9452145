//! Tokio-backed timer scheduler.

use quiz_application::{ScheduledTask, Scheduler, TimerEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Spawns one sleeping task per timer.
///
/// Must be used from inside a tokio runtime. Each task races its sleep
/// against the handle's cancellation token, so a cancelled timer never sends.
#[derive(Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, event: TimerEvent) -> ScheduledTask {
        let token = CancellationToken::new();
        let child = token.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {
                    trace!(kind = event.kind.as_str(), epoch = event.epoch, "Timer cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the controller task has exited
                    let _ = tx.send(event);
                }
            }
        });

        ScheduledTask::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::TimerKind;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(tx);

        let event = TimerEvent::new(TimerKind::ClockTick, 3);
        let _task = scheduler.schedule(Duration::from_secs(1), event);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(event));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(tx);

        let task = scheduler.schedule(
            Duration::from_millis(1500),
            TimerEvent::new(TimerKind::RetryWindowElapsed, 1),
        );
        tokio::time::sleep(Duration::from_millis(500)).await;
        task.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        drop(scheduler);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_fire_in_delay_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(tx);

        let late = TimerEvent::new(TimerKind::ResolveWindowElapsed, 7);
        let early = TimerEvent::new(TimerKind::ClockTick, 7);
        let _a = scheduler.schedule(Duration::from_millis(2000), late);
        let _b = scheduler.schedule(Duration::from_millis(1000), early);

        assert_eq!(rx.recv().await, Some(early));
        assert_eq!(rx.recv().await, Some(late));
    }
}
