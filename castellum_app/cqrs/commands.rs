use uuid::Uuid;

use castellum_game::models::{map::Valley, player::Player};

use crate::cqrs::Command;

/// Queues the next level of the building standing on `slot_id`.
#[derive(Debug, Clone)]
pub struct UpgradeBuilding {
    pub player_id: Uuid,
    pub village_id: u32,
    pub slot_id: u8,
}

impl Command for UpgradeBuilding {
    fn village_id(&self) -> Option<u32> {
        Some(self.village_id)
    }
}

/// Cancels a queued upgrade together with the later upgrades of the same slot.
/// Spent resources are not given back.
#[derive(Debug, Clone)]
pub struct CancelConstruction {
    pub player_id: Uuid,
    pub village_id: u32,
    pub event_id: Uuid,
}

impl Command for CancelConstruction {
    fn village_id(&self) -> Option<u32> {
        Some(self.village_id)
    }
}

#[derive(Debug, Clone)]
pub struct FoundVillage {
    pub player: Player,
    pub valley: Valley,
}

impl Command for FoundVillage {
    fn village_id(&self) -> Option<u32> {
        Some(self.valley.id)
    }
}
