use rrdns_application::use_cases::CollectRotationStateUseCase;
use rrdns_domain::config::rotation::DEFAULT_GC_INTERVAL_SECS;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops rotation cursors that have been idle for the TTL.
pub struct RotationStateGcJob {
    collect: Arc<CollectRotationStateUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl RotationStateGcJob {
    pub fn new(collect: Arc<CollectRotationStateUseCase>) -> Self {
        Self {
            collect,
            interval: Duration::from_secs(DEFAULT_GC_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            ttl_secs = self.collect.ttl().as_secs(),
            "Starting rotation state GC job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RotationStateGcJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.collect.execute();
                        if removed > 0 {
                            let summary = self.collect.summarize();
                            info!(
                                removed,
                                entries = summary.entries,
                                clients = summary.clients,
                                "Rotation state GC cycle completed"
                            );
                        } else {
                            debug!("Rotation state GC cycle found nothing to remove");
                        }
                    }
                }
            }
        });
    }
}
