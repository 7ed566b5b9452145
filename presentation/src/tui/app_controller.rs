//! Background controller task (Actor pattern)
//!
//! Owns the GameController and feeds it commands from the TUI event loop
//! and timer firings from the scheduler.

use super::event::TuiCommand;
use quiz_application::{GameController, TimerEvent};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Background controller task (Actor)
///
/// Exits when the command channel closes or on [`TuiCommand::Shutdown`].
/// Dropping the controller cancels any pending timers.
pub(super) async fn controller_task(
    mut controller: GameController,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    mut timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
) {
    controller.announce();

    loop {
        tokio::select! {
            biased;

            cmd_opt = cmd_rx.recv() => {
                match cmd_opt {
                    Some(TuiCommand::Intent(intent)) => {
                        controller.handle_intent(intent);
                    }
                    Some(TuiCommand::Shutdown) | None => break,
                }
            }

            Some(timer) = timer_rx.recv() => {
                trace!(kind = timer.kind.as_str(), epoch = timer.epoch, "Timer fired");
                controller.on_timer(timer);
            }
        }
    }

    debug!("Controller task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::{GameEvent, GameSettings, Intent, ScheduledTask, Scheduler};
    use quiz_domain::{GamePhase, QuestionSet};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    /// Delivers every timer straight into the channel, ignoring delays
    struct ImmediateScheduler {
        tx: mpsc::UnboundedSender<TimerEvent>,
    }

    impl Scheduler for ImmediateScheduler {
        fn schedule(&self, _delay: Duration, event: TimerEvent) -> ScheduledTask {
            let _ = self.tx.send(event);
            ScheduledTask::new(CancellationToken::new())
        }
    }

    async fn next_snapshot_phase(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> GamePhase {
        loop {
            match rx.recv().await {
                Some(GameEvent::StateChanged(snapshot)) => return snapshot.phase(),
                Some(_) => continue,
                None => panic!("controller closed the event channel"),
            }
        }
    }

    #[tokio::test]
    async fn test_task_announces_and_handles_intents() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let controller = GameController::new(
            QuestionSet::supermarket().unwrap(),
            GameSettings::default(),
            Arc::new(ImmediateScheduler { tx: timer_tx }),
            event_tx,
        );
        let handle = tokio::spawn(controller_task(controller, cmd_rx, timer_rx));

        assert_eq!(next_snapshot_phase(&mut event_rx).await, GamePhase::Start);

        cmd_tx
            .send(TuiCommand::Intent(Intent::BeginGame {
                name: "Linh".to_string(),
                class_name: None,
            }))
            .unwrap();
        assert_eq!(next_snapshot_phase(&mut event_rx).await, GamePhase::Playing);

        cmd_tx.send(TuiCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_task_applies_timer_firings() {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let settings = GameSettings::default().with_time_limit_secs(3);
        let controller = GameController::new(
            QuestionSet::supermarket().unwrap(),
            settings,
            Arc::new(ImmediateScheduler { tx: timer_tx }),
            event_tx,
        );
        let handle = tokio::spawn(controller_task(controller, cmd_rx, timer_rx));

        cmd_tx
            .send(TuiCommand::Intent(Intent::BeginGame {
                name: "Linh".to_string(),
                class_name: None,
            }))
            .unwrap();

        // With every delay collapsed to zero, two timeouts per question play
        // the whole game out to the end screen.
        loop {
            if next_snapshot_phase(&mut event_rx).await == GamePhase::End {
                break;
            }
        }

        drop(cmd_tx);
        handle.await.unwrap();
    }
}
