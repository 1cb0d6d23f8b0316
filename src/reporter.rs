// Periodic stats reporter (same cadence as the original monitor loop).
// Fetch, format, deliver on every tick; any failure skips the cycle and
// the next tick retries naturally.

use crate::notifier::Notify;
use crate::report::build_report;
use crate::stats_repo::StatsRepo;
use std::sync::Arc;
use tokio::time::{Duration, interval};

/// Repo, sink, target chat, and shutdown for the reporter.
pub struct ReporterDeps {
    pub stats_repo: Arc<StatsRepo>,
    pub notifier: Arc<dyn Notify>,
    pub chat_id: String,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct ReporterConfig {
    pub interval: Duration,
}

pub fn spawn(deps: ReporterDeps, config: ReporterConfig) -> tokio::task::JoinHandle<()> {
    let ReporterDeps {
        stats_repo,
        notifier,
        chat_id,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        let mut tick = interval(config.interval);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The zeroth tick completes immediately; the first report goes out
        // one full interval after startup.
        tick.tick().await;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let info = match stats_repo.fetch().await {
                        Ok(info) => info,
                        Err(e) => {
                            tracing::warn!(
                                error = %e,
                                operation = "fetch_stats",
                                "stats fetch failed, skipping this cycle"
                            );
                            continue;
                        }
                    };
                    let message = build_report(&info);
                    match notifier.deliver(&chat_id, &message).await {
                        Ok(()) => tracing::info!(
                            operation = "deliver_report",
                            active_connections = info.active_connections,
                            "stats report sent"
                        ),
                        Err(e) => tracing::warn!(
                            error = %e,
                            operation = "deliver_report",
                            "report delivery failed"
                        ),
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Reporter shutting down");
                    break;
                }
            }
        }
    })
}
