mod cancel_construction;
mod found_village;
mod upgrade_building;

pub use cancel_construction::CancelConstructionCommandHandler;
pub use found_village::FoundVillageCommandHandler;
pub use upgrade_building::UpgradeBuildingCommandHandler;

use castellum_game::models::village::Village;
use castellum_types::errors::{AppError, ApplicationError};
use uuid::Uuid;

fn ensure_owner(village: &Village, player_id: Uuid) -> Result<(), ApplicationError> {
    if village.player_id != player_id {
        return Err(AppError::VillageNotOwned {
            village_id: village.id,
            player_id,
        }
        .into());
    }
    Ok(())
}
