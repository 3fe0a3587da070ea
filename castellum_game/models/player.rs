use serde::{Deserialize, Serialize};
use uuid::Uuid;

use castellum_types::tribe::Tribe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub username: String,
    pub tribe: Tribe,
    /// Computer-controlled owner of pre-generated villages.
    pub is_npc: bool,
}

impl Player {
    pub fn village_name(&self) -> String {
        format!("{}'s village", self.username)
    }
}
