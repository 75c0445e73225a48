use rrdns_application::ports::RotationStateStore;
use rrdns_application::use_cases::{build_shuffler, CollectRotationStateUseCase};
use rrdns_domain::{Config, RotationStrategy};
use rrdns_infrastructure::dns::{DashMapRotationStore, LocalZone, ResponseRotator, RotationDnsHandler};
use rrdns_jobs::RotationStateGcJob;
use std::sync::Arc;
use tracing::info;

pub struct RotationServices {
    pub strategy: RotationStrategy,
    pub handler: RotationDnsHandler,
    pub gc_job: Option<RotationStateGcJob>,
}

impl RotationServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let strategy = config.rotation.strategy()?;
        info!(strategy = %strategy, records = config.records.len(), "Initializing rotation services");

        let store: Arc<dyn RotationStateStore> = Arc::new(DashMapRotationStore::new());
        let rotator = ResponseRotator::new(build_shuffler(strategy, store.clone()));
        let zone = Arc::new(LocalZone::from_config(&config.records)?);

        let gc_job = match strategy {
            RotationStrategy::Stateful => {
                let collect = Arc::new(CollectRotationStateUseCase::new(
                    store,
                    config.rotation.state_ttl(),
                ));
                Some(RotationStateGcJob::new(collect).with_interval(config.rotation.gc_interval()))
            }
            RotationStrategy::Stateless | RotationStrategy::Random => None,
        };

        Ok(Self {
            strategy,
            handler: RotationDnsHandler::new(zone, rotator),
            gc_job,
        })
    }
}
