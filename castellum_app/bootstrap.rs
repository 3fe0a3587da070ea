use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use castellum_game::models::{
    buildings::BuildingCatalog, factory::VillageFactory, map::Valley, player::Player,
};
use castellum_types::{
    errors::ApplicationError,
    map::{Position, ResourceFieldComposition},
    tribe::Tribe,
};

use crate::{config::Config, uow::UnitOfWorkProvider};

/// Distances from the centre, as fractions of the world size, at which NPC
/// villages are placed on each axis.
const NPC_RINGS: [(i32, i32); 4] = [(1, 20), (1, 5), (2, 5), (3, 4)];

/// Owner of the pre-generated villages.
pub fn natar_player() -> Player {
    Player {
        id: Uuid::nil(),
        username: "Natars".to_string(),
        tribe: Tribe::Natar,
        is_npc: true,
    }
}

/// Valleys of the NPC villages: four per ring, one on each axis.
pub fn npc_valleys(world_size: i32, owner: &Player) -> Vec<Valley> {
    NPC_RINGS
        .iter()
        .flat_map(|(num, den)| {
            let r = (world_size * num / den).max(1);
            [(r, 0), (-r, 0), (0, r), (0, -r)]
        })
        .map(|(x, y)| {
            let mut valley = Valley::new(
                Position { x, y },
                ResourceFieldComposition::default(),
                world_size,
            );
            valley.player_id = Some(owner.id);
            valley
        })
        .collect()
}

/// Seeds an empty world with NPC villages. Returns `false` when villages
/// already exist and nothing was done.
pub async fn bootstrap_world_map(
    uow_provider: &Arc<dyn UnitOfWorkProvider>,
    catalog: &BuildingCatalog,
    config: &Config,
) -> Result<bool, ApplicationError> {
    let uow = uow_provider.begin().await?;
    let village_repo = uow.villages();

    if !village_repo.list().await?.is_empty() {
        uow.rollback().await?;
        return Ok(false);
    }

    let natars = natar_player();
    let valleys = npc_valleys(config.world_size, &natars);
    let factory = VillageFactory::new(catalog, config.factory_settings());

    let villages = match factory.generate_npc_villages(&valleys, &[natars], Utc::now()) {
        Ok(villages) => villages,
        Err(e) => {
            uow.rollback().await?;
            return Err(e.into());
        }
    };

    for village in &villages {
        if let Err(e) = village_repo.save(village).await {
            uow.rollback().await?;
            return Err(e);
        }
    }
    uow.commit().await?;

    info!(count = villages.len(), "NPC villages generated");
    Ok(true)
}
