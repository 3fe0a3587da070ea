use thiserror::Error;
use uuid::Uuid;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Village with ID {0} not found")]
    VillageNotFound(u32),

    #[error("Construction event with ID {0} not found")]
    EventNotFound(Uuid),

    #[error("Village {village_id} not owned by player {player_id}")]
    VillageNotOwned { village_id: u32, player_id: Uuid },
}
