use chrono::Utc;
use std::sync::Arc;

use castellum_game::models::{buildings::BuildingCatalog, construction::effective_level};
use castellum_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{ConstructionQueueItem, FieldOverview, GetVillageEconomy, VillageEconomy},
    },
    uow::UnitOfWork,
};

pub struct GetVillageEconomyHandler {
    catalog: Arc<BuildingCatalog>,
}

impl GetVillageEconomyHandler {
    pub fn new(catalog: Arc<BuildingCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetVillageEconomy> for GetVillageEconomyHandler {
    async fn handle(
        &self,
        query: GetVillageEconomy,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetVillageEconomy as Query>::Output, ApplicationError> {
        let village = uow.villages().get_by_id(query.village_id).await?;
        let pending = uow
            .construction_events()
            .pending_events(query.village_id)
            .await?;
        let now = Utc::now();
        let catalog = self.catalog.as_ref();

        let fields = village
            .building_fields(catalog)?
            .iter()
            .map(|field| FieldOverview {
                slot_id: field.slot_id,
                building: field.building,
                level: field.level,
                effective_level: effective_level(field, &pending),
            })
            .collect();

        let queue = pending
            .iter()
            .map(|event| ConstructionQueueItem {
                event_id: event.id,
                building: event.building,
                slot_id: event.slot_id,
                level: event.level,
                resolves_at: event.resolves_at,
            })
            .collect();

        Ok(VillageEconomy {
            village_id: village.id,
            resources: village.projected_resources(now, catalog)?,
            hourly_production: village.hourly_production(catalog)?,
            net_production: village.net_production(catalog)?,
            capacity: village.storage_capacity(catalog)?,
            wheat_upkeep: village.wheat_upkeep,
            stats: village.population_stats(catalog)?,
            fields,
            queue,
            calculated_at: now,
        })
    }
}
