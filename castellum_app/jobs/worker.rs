use chrono::{DateTime, Utc};
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time};
use tracing::{debug, error, info, instrument};

use castellum_game::models::{
    buildings::BuildingCatalog, construction::ConstructionEvent, village::Village,
};
use castellum_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    jobs::ticker::AccrualTicker,
    uow::{UnitOfWork, UnitOfWorkProvider},
};

/// Polls the event store and applies construction events once they are due.
pub struct ConstructionWorker {
    uow_provider: Arc<dyn UnitOfWorkProvider>,
    catalog: Arc<BuildingCatalog>,
    config: Arc<Config>,
    ticker: Option<Arc<AccrualTicker>>,
}

impl ConstructionWorker {
    pub fn new(
        uow_provider: Arc<dyn UnitOfWorkProvider>,
        catalog: Arc<BuildingCatalog>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            uow_provider,
            catalog,
            config,
            ticker: None,
        }
    }

    /// Re-anchors the village's live counters after each applied event.
    pub fn with_ticker(mut self, ticker: Arc<AccrualTicker>) -> Self {
        self.ticker = Some(ticker);
        self
    }

    /// Run worker loop inside a tokio task.
    pub fn run(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let period = Duration::from_millis(self.config.worker_interval_ms);
            let mut interval = time::interval(period);
            info!(
                interval_ms = self.config.worker_interval_ms,
                "Construction worker started"
            );

            loop {
                interval.tick().await;
                if let Err(e) = self.process_due_events(Utc::now()).await {
                    error!(error = %e, "Error while processing construction events");
                }
            }
        })
    }

    /// Resolves every event due at `now`, earliest first. Returns how many
    /// were applied.
    pub async fn process_due_events(&self, now: DateTime<Utc>) -> Result<usize, ApplicationError> {
        let due = {
            let uow = self.uow_provider.begin().await?;
            let due = uow.construction_events().due_events(now).await;
            uow.rollback().await?;
            due?
        };

        if due.is_empty() {
            return Ok(0);
        }
        debug!(count = due.len(), "Found due construction events");

        let mut resolved = 0;
        for event in due {
            match self.resolve_event(&event).await {
                Ok(true) => resolved += 1,
                Ok(false) => {}
                Err(e) => {
                    error!(event_id = %event.id, error = %e, "Construction event has failed");
                    if let Err(e) = self.discard_event(&event).await {
                        error!(event_id = %event.id, error = %e, "Unable to cancel failed event");
                    }
                }
            }
        }

        Ok(resolved)
    }

    async fn resolve_event(&self, event: &ConstructionEvent) -> Result<bool, ApplicationError> {
        let uow = self.uow_provider.begin().await?;

        let village = match self.apply(event, &uow).await {
            Ok(village) => {
                uow.commit().await?;
                village
            }
            Err(e) => {
                uow.rollback().await?;
                return Err(e);
            }
        };

        let Some(village) = village else {
            return Ok(false);
        };
        if let Some(ticker) = &self.ticker {
            if let Err(e) = ticker.watch(&village).await {
                error!(village_id = village.id, error = %e, "Unable to re-watch village");
            }
        }
        Ok(true)
    }

    #[instrument(skip_all, fields(
        event_id = %event.id,
        village_id = event.village_id,
        slot_id = event.slot_id,
    ))]
    async fn apply(
        &self,
        event: &ConstructionEvent,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Option<Village>, ApplicationError> {
        let event_repo = uow.construction_events();
        let village_repo = uow.villages();

        // Cancelled since it was listed.
        match event_repo.get_by_id(event.id).await {
            Ok(_) => {}
            Err(ApplicationError::App(AppError::EventNotFound(_))) => return Ok(None),
            Err(e) => return Err(e),
        }

        let mut village = village_repo.get_by_id(event.village_id).await?;
        village.refresh_resources(event.resolves_at, &self.catalog)?;
        village.apply_construction(event, &self.catalog)?;

        village_repo.save(&village).await?;
        event_repo.resolve(event.id).await?;

        info!(
            building = %event.building,
            level = event.level,
            wheat_upkeep = village.wheat_upkeep,
            "Construction completed"
        );
        Ok(Some(village))
    }

    async fn discard_event(&self, event: &ConstructionEvent) -> Result<(), ApplicationError> {
        let uow = self.uow_provider.begin().await?;
        match uow.construction_events().cancel(event.id).await {
            Ok(_) => uow.commit().await,
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }
}
