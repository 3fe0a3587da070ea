use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use castellum_types::{
    buildings::{BuildingCategory, BuildingName},
    errors::GameError,
    tribe::Tribe,
};

use super::{
    buildings::BuildingCatalog,
    village::{BuildingField, Village},
};

/// A queued building upgrade, resolving at `resolves_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionEvent {
    pub id: Uuid,
    pub village_id: u32,
    pub building: BuildingName,
    pub slot_id: u8,
    /// Level reached once resolved.
    pub level: u8,
    pub resolves_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ConstructionEvent {
    pub fn new(
        village_id: u32,
        building: BuildingName,
        slot_id: u8,
        level: u8,
        resolves_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            village_id,
            building,
            slot_id,
            level,
            resolves_at,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionStatus {
    Queued,
    Resolved,
    Cancelled,
}

impl ConstructionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConstructionStatus::Queued)
    }
}

/// How many upgrades a village can run at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionPolicy {
    /// One queue for everything.
    Serial,
    /// One queue for resource fields and one for village structures.
    ParallelByClass,
}

impl ConstructionPolicy {
    pub fn for_tribe(tribe: &Tribe) -> Self {
        if tribe.has_parallel_construction() {
            ConstructionPolicy::ParallelByClass
        } else {
            ConstructionPolicy::Serial
        }
    }

    /// Whether a pending upgrade delays a new one.
    pub fn blocks(&self, requested: BuildingCategory, pending: BuildingCategory) -> bool {
        match self {
            ConstructionPolicy::Serial => true,
            ConstructionPolicy::ParallelByClass => requested == pending,
        }
    }
}

/// Level a field will have once every pending upgrade on it resolves.
pub fn effective_level(field: &BuildingField, pending: &[ConstructionEvent]) -> u8 {
    let queued = pending
        .iter()
        .filter(|e| e.slot_id == field.slot_id && e.building == field.building)
        .count();
    field.level.saturating_add(queued.min(u8::MAX as usize) as u8)
}

/// Decides when a new upgrade resolves.
pub struct ConstructionScheduler<'a> {
    catalog: &'a BuildingCatalog,
}

impl<'a> ConstructionScheduler<'a> {
    pub fn new(catalog: &'a BuildingCatalog) -> Self {
        Self { catalog }
    }

    /// Builds the event for the next upgrade of `slot_id`. `pending` holds
    /// the village's queued events in insertion order.
    pub fn schedule(
        &self,
        village: &Village,
        slot_id: u8,
        pending: &[ConstructionEvent],
        now: DateTime<Utc>,
    ) -> Result<ConstructionEvent, GameError> {
        let field = village.field_at(slot_id, self.catalog)?;
        let definition = self.catalog.definition(field.building)?;

        let level = effective_level(&field, pending);
        if level >= definition.max_level() {
            return Err(GameError::AlreadyMaxLevel {
                building: field.building,
                slot_id,
            });
        }

        let next_level = level + 1;
        let duration = Duration::seconds(definition.level(next_level)?.duration_secs as i64);

        let mut last_relevant = None;
        for event in pending {
            let category = self.catalog.category(event.building)?;
            if village
                .construction_policy
                .blocks(definition.category(), category)
            {
                last_relevant = Some(event);
            }
        }

        let starts_at = last_relevant.map_or(now, |e| e.resolves_at);

        Ok(ConstructionEvent::new(
            village.id,
            field.building,
            slot_id,
            next_level,
            starts_at + duration,
            now,
        ))
    }
}
