//! Elapsed time refresh background task

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, trace};

use crate::state::WeakTracker;

/// Background task that recomputes the tracker's elapsed time on its cadence.
///
/// Runs until the tracker is stopped, reset, restarted under a newer run, or
/// dropped.
pub async fn refresh_task(tracker: WeakTracker, generation: u64) {
    let cadence = match tracker.upgrade() {
        Some(strong) => strong.cadence(),
        None => return,
    };
    debug!("Starting refresh task for run {} every {:?}", generation, cadence);

    let mut ticker = interval(cadence);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let Some(strong) = tracker.upgrade() else {
            debug!("Tracker dropped, ending refresh task for run {}", generation);
            break;
        };

        match strong.refresh(generation) {
            Some(state) => trace!("Refreshed elapsed time: {}ms", state.elapsed_millis),
            None => {
                debug!("Run {} is over, ending refresh task", generation);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::ElapsedTimeTracker;

    #[tokio::test(start_paused = true)]
    async fn exits_when_run_is_stale() {
        let tracker = ElapsedTimeTracker::new(Duration::from_millis(10));

        // Nothing is running, so generation 0 is already over
        tokio::time::timeout(Duration::from_millis(50), refresh_task(tracker.downgrade(), 0))
            .await
            .expect("refresh task should exit for a stopped tracker");
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_tracker_is_dropped() {
        let tracker = ElapsedTimeTracker::new(Duration::from_millis(10));
        let weak = tracker.downgrade();
        tracker.start();
        drop(tracker);

        tokio::time::timeout(Duration::from_millis(50), refresh_task(weak, 1))
            .await
            .expect("refresh task should exit once the tracker is gone");
    }
}
