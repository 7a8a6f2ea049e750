use std::time::Duration;

use dioxus::prelude::*;

use planforge_core::{ProgressDriver, StepStatus, TickOutcome};

/// Read handle over a running progress driver.
///
/// Everything a screen shows is derived from this snapshot; the handle
/// exposes no way to advance or reset the cursor from render code.
#[derive(Clone, Copy)]
pub struct ProgressHandle {
    driver: Signal<ProgressDriver>,
}

impl ProgressHandle {
    #[must_use]
    pub fn status_of(&self, index: usize) -> StepStatus {
        self.driver.read().status_of(index)
    }

    /// Whether the step at `index` has been consumed (or the run finished).
    #[must_use]
    pub fn revealed(&self, index: usize) -> bool {
        self.status_of(index) == StepStatus::Completed
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.driver.read().cursor()
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.driver.read().percent()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.driver.read().is_complete()
    }
}

/// Drive a fixed-length step sequence at `tick` intervals.
///
/// This is the one progress-simulation implementation in the app; the
/// evaluation modal, the results loader, and the overview reveal all call
/// it with their own step count and cadence.
///
/// The timer task is owned by the calling component's scope: spawned once
/// on mount and dropped (cancelled) with the scope. Host views mount their
/// driver-bearing subtree only while it is open, so closing cancels the
/// ticker and reopening starts a fresh cursor at zero; two tickers can
/// never race on one driver. After the final tick the task sleeps
/// `completion_delay`, fires `on_complete` at most once, and exits.
pub fn use_progress_driver(
    total: usize,
    tick: Duration,
    completion_delay: Duration,
    on_complete: Option<EventHandler<()>>,
) -> ProgressHandle {
    let mut driver = use_signal(move || {
        let mut driver = ProgressDriver::new(total);
        driver.start();
        driver
    });

    use_hook(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(tick).await;
                let outcome = driver.write().tick();
                match outcome {
                    TickOutcome::Advanced => {}
                    TickOutcome::Finished => {
                        tokio::time::sleep(completion_delay).await;
                        if let Some(handler) = on_complete {
                            handler.call(());
                        }
                        break;
                    }
                    TickOutcome::Noop => break,
                }
            }
        })
    });

    ProgressHandle { driver }
}
