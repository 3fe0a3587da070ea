use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use castellum_game::models::{buildings::BuildingCatalog, construction::ConstructionScheduler};
use castellum_types::errors::{ApplicationError, GameError};

use crate::{
    command_handlers::ensure_owner,
    config::Config,
    cqrs::{CommandHandler, commands::UpgradeBuilding},
    uow::UnitOfWork,
};

pub struct UpgradeBuildingCommandHandler {
    catalog: Arc<BuildingCatalog>,
}

impl UpgradeBuildingCommandHandler {
    pub fn new(catalog: Arc<BuildingCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpgradeBuilding> for UpgradeBuildingCommandHandler {
    #[instrument(skip_all, fields(
        village_id = command.village_id,
        slot_id = command.slot_id,
    ))]
    async fn handle(
        &self,
        command: UpgradeBuilding,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let village_repo = uow.villages();
        let event_repo = uow.construction_events();
        let now = Utc::now();

        let mut village = village_repo.get_by_id(command.village_id).await?;
        ensure_owner(&village, command.player_id)?;
        village.refresh_resources(now, &self.catalog)?;

        let pending = event_repo.pending_events(village.id).await?;
        let event = ConstructionScheduler::new(&self.catalog).schedule(
            &village,
            command.slot_id,
            &pending,
            now,
        )?;

        let cost = self.catalog.level_row(event.building, event.level)?.cost;
        if !village.has_enough_resources(&cost) {
            return Err(GameError::NotEnoughResources.into());
        }
        village.deduct_resources(&cost)?;

        village_repo.save(&village).await?;
        event_repo.enqueue(&event).await?;

        info!(
            event_id = %event.id,
            building = %event.building,
            level = event.level,
            resolves_at = %event.resolves_at,
            "Upgrade queued"
        );
        Ok(())
    }
}
