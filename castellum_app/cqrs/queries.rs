use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use castellum_game::models::{population::PopulationStats, production::StorageCapacity};
use castellum_types::{buildings::BuildingName, common::ResourceSet};

use crate::cqrs::Query;

pub struct GetVillageEconomy {
    pub village_id: u32,
}

impl Query for GetVillageEconomy {
    type Output = VillageEconomy;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverview {
    pub slot_id: u8,
    pub building: BuildingName,
    pub level: u8,
    /// Level once every queued upgrade of the slot is done.
    pub effective_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionQueueItem {
    pub event_id: Uuid,
    pub building: BuildingName,
    pub slot_id: u8,
    pub level: u8,
    pub resolves_at: DateTime<Utc>,
}

/// Live economic state of a village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageEconomy {
    pub village_id: u32,
    pub resources: ResourceSet,
    pub hourly_production: ResourceSet,
    pub net_production: ResourceSet,
    pub capacity: StorageCapacity,
    pub wheat_upkeep: u32,
    pub stats: PopulationStats,
    pub fields: Vec<FieldOverview>,
    pub queue: Vec<ConstructionQueueItem>,
    pub calculated_at: DateTime<Utc>,
}
