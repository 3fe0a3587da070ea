use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use castellum_game::models::{buildings::BuildingCatalog, factory::VillageFactory};
use castellum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::FoundVillage},
    uow::UnitOfWork,
};

pub struct FoundVillageCommandHandler {
    catalog: Arc<BuildingCatalog>,
}

impl FoundVillageCommandHandler {
    pub fn new(catalog: Arc<BuildingCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl CommandHandler<FoundVillage> for FoundVillageCommandHandler {
    #[instrument(skip_all, fields(
        player_id = %command.player.id,
        valley_id = command.valley.id,
    ))]
    async fn handle(
        &self,
        command: FoundVillage,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let factory = VillageFactory::new(&self.catalog, config.factory_settings());
        let village = factory.player_village(&command.player, &command.valley, Utc::now())?;

        uow.villages().save(&village).await?;

        info!(village_id = village.id, tribe = ?village.tribe, "Village founded");
        Ok(())
    }
}
