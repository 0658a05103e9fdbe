//! Background refresh loop.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::Aggregator;

/// Spawn the refresh loop: one cycle immediately, then one every `period`.
///
/// Cycles run one after another on this task and never overlap. A cycle that
/// outlasts `period` pushes the next tick back instead of queueing a burst.
pub fn spawn_refresh_loop(aggregator: Aggregator, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Statistics refresh enabled, period {:?}", period);

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            tracing::info!("Statistics cycle started");
            let report = aggregator.run_cycle().await;
            tracing::info!(
                aborted = report.aborted,
                posts_seen = report.posts_seen,
                posts_skipped = report.posts_skipped,
                rows_written = report.rows_written,
                write_failures = report.write_failures,
                "Statistics cycle finished"
            );
        }
    })
}
