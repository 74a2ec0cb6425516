use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::common::DisplayPublisher;
use crate::hydro::PlotSource;
use crate::sync::worker;

/// Run the dashboard refresh task on a schedule.
///
/// Refreshes once immediately, then every `interval_secs`. Each cycle is
/// awaited before the next tick; ticks missed while a slow cycle runs are
/// skipped, so cycles never overlap. Returns when every display reader has
/// been dropped.
pub async fn run_display_refresh(
    source: Arc<dyn PlotSource>,
    publisher: DisplayPublisher,
    interval_secs: u64,
) {
    tracing::info!(interval_secs, "Starting display refresh scheduler");

    let mut ticker = interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // First tick completes immediately
        ticker.tick().await;

        if publisher.is_closed() {
            tracing::info!("No display readers left, stopping refresh scheduler");
            break;
        }

        tracing::debug!("Running display refresh...");
        let state = worker::refresh_once(source.as_ref()).await;
        publisher.send_replace(Some(Arc::new(state)));
    }
}
