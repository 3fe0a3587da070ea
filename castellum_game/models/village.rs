use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, collections::HashSet};
use uuid::Uuid;

use castellum_types::{
    buildings::{BuildingCategory, BuildingName},
    common::{ResourceKind, ResourceSet},
    errors::GameError,
    map::{Position, RESOURCE_FIELDS_COUNT, ResourceFieldComposition},
    tribe::Tribe,
};

use super::{
    accrual::AccrualReading,
    buildings::BuildingCatalog,
    construction::{ConstructionEvent, ConstructionPolicy},
    population::{self, PopulationStats},
    presets::BuildingFieldsPreset,
    production::{self, StorageCapacity},
};

pub const FIRST_STRUCTURE_SLOT: u8 = RESOURCE_FIELDS_COUNT + 1;
pub const MAIN_BUILDING_SLOT: u8 = 38;
pub const RALLY_POINT_SLOT: u8 = 39;
pub const WALL_SLOT: u8 = 40;
pub const LAST_SLOT: u8 = WALL_SLOT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingField {
    pub slot_id: u8,
    pub building: BuildingName,
    pub level: u8,
}

impl BuildingField {
    pub fn new(slot_id: u8, building: BuildingName, level: u8) -> Self {
        Self {
            slot_id,
            building,
            level,
        }
    }
}

/// Building fields of a village. NPC villages keep their presets unexpanded
/// until something needs the individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VillageLayout {
    Materialized(Vec<BuildingField>),
    Deferred {
        fields: Vec<BuildingField>,
        presets: Vec<BuildingFieldsPreset>,
    },
}

impl VillageLayout {
    pub fn is_deferred(&self) -> bool {
        matches!(self, VillageLayout::Deferred { .. })
    }

    /// Full field list sorted by slot. Explicit fields win over preset ones,
    /// and earlier presets win over later ones.
    pub fn expand(
        &self,
        composition: &ResourceFieldComposition,
        catalog: &BuildingCatalog,
    ) -> Result<Cow<'_, [BuildingField]>, GameError> {
        let (fields, presets) = match self {
            VillageLayout::Materialized(fields) => return Ok(Cow::Borrowed(fields)),
            VillageLayout::Deferred { fields, presets } => (fields, presets),
        };

        let mut expanded = fields.clone();
        let mut taken: HashSet<u8> = fields.iter().map(|f| f.slot_id).collect();

        for preset in presets {
            for field in preset.expand(composition, catalog)? {
                if taken.insert(field.slot_id) {
                    expanded.push(field);
                }
            }
        }

        expanded.sort_by_key(|f| f.slot_id);
        Ok(Cow::Owned(expanded))
    }
}

/// Everything needed to create a village.
#[derive(Debug, Clone)]
pub struct VillageSeed {
    pub id: u32,
    pub name: String,
    pub player_id: Uuid,
    pub position: Position,
    pub tribe: Tribe,
    pub composition: ResourceFieldComposition,
    pub layout: VillageLayout,
    pub resources: ResourceSet,
    pub is_capital: bool,
    pub wheat_upkeep: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    pub id: u32,
    pub name: String,
    pub player_id: Uuid,
    pub position: Position,
    pub tribe: Tribe,
    pub composition: ResourceFieldComposition,
    layout: VillageLayout,
    resources: ResourceSet,
    pub updated_at: DateTime<Utc>,
    pub is_capital: bool,
    pub wheat_upkeep: u32,
    pub construction_policy: ConstructionPolicy,
}

impl Village {
    pub fn new(
        seed: VillageSeed,
        catalog: &BuildingCatalog,
        now: DateTime<Utc>,
    ) -> Result<Self, GameError> {
        validate_layout(
            &seed.layout.expand(&seed.composition, catalog)?,
            &seed.composition,
            catalog,
        )?;

        Ok(Self {
            id: seed.id,
            name: seed.name,
            player_id: seed.player_id,
            position: seed.position,
            construction_policy: ConstructionPolicy::for_tribe(&seed.tribe),
            tribe: seed.tribe,
            composition: seed.composition,
            layout: seed.layout,
            resources: seed.resources,
            updated_at: now,
            is_capital: seed.is_capital,
            wheat_upkeep: seed.wheat_upkeep,
        })
    }

    pub fn layout(&self) -> &VillageLayout {
        &self.layout
    }

    /// Last stored resources, as of `updated_at`.
    pub fn resources(&self) -> ResourceSet {
        self.resources
    }

    pub fn building_fields(
        &self,
        catalog: &BuildingCatalog,
    ) -> Result<Cow<'_, [BuildingField]>, GameError> {
        self.layout.expand(&self.composition, catalog)
    }

    /// Replaces a deferred layout with its expanded fields.
    pub fn materialize(&mut self, catalog: &BuildingCatalog) -> Result<(), GameError> {
        if !self.layout.is_deferred() {
            return Ok(());
        }
        let fields = self.building_fields(catalog)?.into_owned();
        self.layout = VillageLayout::Materialized(fields);
        Ok(())
    }

    pub fn field_at(
        &self,
        slot_id: u8,
        catalog: &BuildingCatalog,
    ) -> Result<BuildingField, GameError> {
        self.building_fields(catalog)?
            .iter()
            .find(|f| f.slot_id == slot_id)
            .copied()
            .ok_or(GameError::UnknownField { slot_id })
    }

    pub fn hourly_production(&self, catalog: &BuildingCatalog) -> Result<ResourceSet, GameError> {
        production::hourly_production(&self.building_fields(catalog)?, catalog)
    }

    /// Production minus wheat upkeep. Wheat never goes below 0.
    pub fn net_production(&self, catalog: &BuildingCatalog) -> Result<ResourceSet, GameError> {
        let mut net = self.hourly_production(catalog)?;
        net.set(
            ResourceKind::Wheat,
            net.wheat().saturating_sub(self.wheat_upkeep),
        );
        Ok(net)
    }

    pub fn storage_capacity(
        &self,
        catalog: &BuildingCatalog,
    ) -> Result<StorageCapacity, GameError> {
        production::storage_capacity(&self.building_fields(catalog)?, catalog)
    }

    pub fn population_stats(
        &self,
        catalog: &BuildingCatalog,
    ) -> Result<PopulationStats, GameError> {
        population::aggregate(&self.building_fields(catalog)?, catalog)
    }

    /// Accrual readings anchored at the last stored state, one per resource.
    pub fn accrual_readings(
        &self,
        catalog: &BuildingCatalog,
    ) -> Result<Vec<(ResourceKind, AccrualReading)>, GameError> {
        let net = self.net_production(catalog)?;
        let capacity = self.storage_capacity(catalog)?;

        Ok(ResourceKind::ALL
            .into_iter()
            .map(|kind| {
                let reading = AccrualReading {
                    amount: self.resources.get(kind),
                    updated_at: self.updated_at,
                    hourly: net.get(kind),
                    capacity: capacity.for_kind(kind),
                };
                (kind, reading)
            })
            .collect())
    }

    /// Resources at `now`, without touching the stored state.
    pub fn projected_resources(
        &self,
        now: DateTime<Utc>,
        catalog: &BuildingCatalog,
    ) -> Result<ResourceSet, GameError> {
        let mut projected = ResourceSet::default();
        for (kind, reading) in self.accrual_readings(catalog)? {
            projected.set(kind, reading.project(now));
        }
        Ok(projected)
    }

    /// Stores the projected resources and moves `updated_at` to `now`.
    pub fn refresh_resources(
        &mut self,
        now: DateTime<Utc>,
        catalog: &BuildingCatalog,
    ) -> Result<(), GameError> {
        if now <= self.updated_at {
            return Ok(());
        }
        self.resources = self.projected_resources(now, catalog)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn has_enough_resources(&self, cost: &ResourceSet) -> bool {
        self.resources.covers(cost)
    }

    pub fn deduct_resources(&mut self, cost: &ResourceSet) -> Result<(), GameError> {
        self.resources = self
            .resources
            .checked_sub(cost)
            .ok_or(GameError::NotEnoughResources)?;
        Ok(())
    }

    /// Applies a resolved upgrade. The event must target exactly the next level
    /// of the building standing on its slot.
    pub fn apply_construction(
        &mut self,
        event: &ConstructionEvent,
        catalog: &BuildingCatalog,
    ) -> Result<(), GameError> {
        let current = self.field_at(event.slot_id, catalog)?;

        if current.building != event.building {
            return Err(GameError::InvalidPlacement {
                slot_id: event.slot_id,
                reason: format!("slot holds {}, not {}", current.building, event.building),
            });
        }
        if event.level != current.level.saturating_add(1) {
            return Err(GameError::UnexpectedUpgradeLevel {
                slot_id: event.slot_id,
                current: current.level,
                requested: event.level,
            });
        }

        let before = population::aggregate(&[current], catalog)?;
        let upgraded = BuildingField::new(current.slot_id, current.building, event.level);
        let after = population::aggregate(&[upgraded], catalog)?;

        self.materialize(catalog)?;
        if let VillageLayout::Materialized(fields) = &mut self.layout {
            if let Some(field) = fields.iter_mut().find(|f| f.slot_id == event.slot_id) {
                field.level = event.level;
            }
        }

        self.wheat_upkeep = (self.wheat_upkeep + after.population).saturating_sub(before.population);
        Ok(())
    }
}

fn validate_layout(
    fields: &[BuildingField],
    composition: &ResourceFieldComposition,
    catalog: &BuildingCatalog,
) -> Result<(), GameError> {
    let mut seen = HashSet::new();

    for field in fields {
        let slot_id = field.slot_id;
        let invalid = |reason: String| GameError::InvalidPlacement { slot_id, reason };

        if !(1..=LAST_SLOT).contains(&slot_id) {
            return Err(invalid(format!("slot must be within 1..={LAST_SLOT}")));
        }
        if !seen.insert(slot_id) {
            return Err(invalid("slot is already taken".to_string()));
        }

        let category = catalog.category(field.building)?;
        match composition.resource_at(slot_id) {
            Some(kind) => {
                let expected = BuildingName::resource_field_for(kind);
                if field.building != expected {
                    return Err(invalid(format!(
                        "resource slot expects {expected}, got {}",
                        field.building
                    )));
                }
            }
            None if category != BuildingCategory::VillageStructure => {
                return Err(invalid(format!(
                    "{} is not a village structure",
                    field.building
                )));
            }
            None => {}
        }

        catalog.level_row(field.building, field.level)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{VillageFactoryOptions, village_factory};
    use castellum_types::map::VillageSize;
    use chrono::Duration;

    fn seed(layout: VillageLayout) -> VillageSeed {
        VillageSeed {
            id: 1,
            name: "Test".to_string(),
            player_id: Uuid::new_v4(),
            position: Position { x: 0, y: 0 },
            tribe: Tribe::Gaul,
            composition: ResourceFieldComposition::default(),
            layout,
            resources: ResourceSet::splat(750),
            is_capital: false,
            wheat_upkeep: 3,
        }
    }

    #[test]
    fn test_new_village_rejects_bad_layouts() {
        let catalog = BuildingCatalog::standard();
        let now = Utc::now();

        let wrong_resource = VillageLayout::Materialized(vec![BuildingField::new(
            1,
            BuildingName::Cropland,
            0,
        )]);
        assert!(matches!(
            Village::new(seed(wrong_resource), &catalog, now),
            Err(GameError::InvalidPlacement { slot_id: 1, .. })
        ));

        let duplicate = VillageLayout::Materialized(vec![
            BuildingField::new(19, BuildingName::Cranny, 1),
            BuildingField::new(19, BuildingName::Warehouse, 1),
        ]);
        assert!(matches!(
            Village::new(seed(duplicate), &catalog, now),
            Err(GameError::InvalidPlacement { slot_id: 19, .. })
        ));

        let field_in_village = VillageLayout::Materialized(vec![BuildingField::new(
            25,
            BuildingName::Woodcutter,
            1,
        )]);
        assert!(matches!(
            Village::new(seed(field_in_village), &catalog, now),
            Err(GameError::InvalidPlacement { slot_id: 25, .. })
        ));

        let out_of_range = VillageLayout::Materialized(vec![BuildingField::new(
            41,
            BuildingName::Cranny,
            1,
        )]);
        assert!(matches!(
            Village::new(seed(out_of_range), &catalog, now),
            Err(GameError::InvalidPlacement { slot_id: 41, .. })
        ));

        let too_high = VillageLayout::Materialized(vec![BuildingField::new(
            21,
            BuildingName::Cranny,
            11,
        )]);
        assert!(matches!(
            Village::new(seed(too_high), &catalog, now),
            Err(GameError::LevelOutOfRange { .. })
        ));
    }

    #[test]
    fn test_policy_follows_tribe() {
        let roman = village_factory(VillageFactoryOptions {
            tribe: Some(Tribe::Roman),
            ..Default::default()
        });
        assert_eq!(roman.construction_policy, ConstructionPolicy::ParallelByClass);

        let teuton = village_factory(VillageFactoryOptions {
            tribe: Some(Tribe::Teuton),
            ..Default::default()
        });
        assert_eq!(teuton.construction_policy, ConstructionPolicy::Serial);
    }

    #[test]
    fn test_deferred_layout_expands_on_demand() {
        let catalog = BuildingCatalog::standard();
        let wall = BuildingField::new(WALL_SLOT, BuildingName::Palisade, 10);
        let layout = VillageLayout::Deferred {
            fields: vec![
                wall,
                // explicit field wins over the preset one
                BuildingField::new(MAIN_BUILDING_SLOT, BuildingName::MainBuilding, 1),
            ],
            presets: vec![
                BuildingFieldsPreset::Resources(VillageSize::Sm),
                BuildingFieldsPreset::Village(VillageSize::Sm),
            ],
        };

        let mut village = Village::new(seed(layout), &catalog, Utc::now()).unwrap();
        let fields = village.building_fields(&catalog).unwrap().into_owned();

        assert_eq!(fields.len(), 18 + 5 + 1);
        assert!(fields.windows(2).all(|w| w[0].slot_id < w[1].slot_id));
        assert_eq!(village.field_at(WALL_SLOT, &catalog).unwrap(), wall);
        assert_eq!(
            village.field_at(MAIN_BUILDING_SLOT, &catalog).unwrap().level,
            1
        );
        assert_eq!(village.field_at(1, &catalog).unwrap().level, 4);

        village.materialize(&catalog).unwrap();
        assert_eq!(village.layout(), &VillageLayout::Materialized(fields));
    }

    #[test]
    fn test_field_at_unknown_slot() {
        let catalog = BuildingCatalog::standard();
        let village = village_factory(Default::default());
        assert_eq!(
            village.field_at(30, &catalog).unwrap_err(),
            GameError::UnknownField { slot_id: 30 }
        );
    }

    #[test]
    fn test_net_production_subtracts_upkeep() {
        let catalog = BuildingCatalog::standard();
        let mut village = village_factory(Default::default());

        assert_eq!(
            village.net_production(&catalog).unwrap(),
            ResourceSet::new(12, 12, 12, 15)
        );

        village.wheat_upkeep = 100;
        assert_eq!(village.net_production(&catalog).unwrap().wheat(), 0);
    }

    #[test]
    fn test_refresh_resources_projects_and_reanchors() {
        let catalog = BuildingCatalog::standard();
        let mut village = village_factory(Default::default());
        let start = village.updated_at;

        // 12 wood per hour, 15 net wheat per hour
        let later = start + Duration::minutes(30);
        village.refresh_resources(later, &catalog).unwrap();
        assert_eq!(village.resources(), ResourceSet::new(756, 756, 756, 757));
        assert_eq!(village.updated_at, later);

        // stock never exceeds storage
        village
            .refresh_resources(later + Duration::days(30), &catalog)
            .unwrap();
        assert_eq!(village.resources(), ResourceSet::splat(800));
    }

    #[test]
    fn test_refresh_resources_ignores_the_past() {
        let catalog = BuildingCatalog::standard();
        let mut village = village_factory(Default::default());
        let start = village.updated_at;

        village
            .refresh_resources(start - Duration::hours(1), &catalog)
            .unwrap();
        assert_eq!(village.resources(), ResourceSet::splat(750));
        assert_eq!(village.updated_at, start);
    }

    #[test]
    fn test_deduct_resources() {
        let mut village = village_factory(Default::default());

        village
            .deduct_resources(&ResourceSet::new(40, 100, 50, 60))
            .unwrap();
        assert_eq!(village.resources(), ResourceSet::new(710, 650, 700, 690));

        assert_eq!(
            village.deduct_resources(&ResourceSet::new(0, 651, 0, 0)),
            Err(GameError::NotEnoughResources)
        );
        assert_eq!(village.resources(), ResourceSet::new(710, 650, 700, 690));
    }

    #[test]
    fn test_apply_construction_updates_level_and_upkeep() {
        let catalog = BuildingCatalog::standard();
        let mut village = village_factory(Default::default());
        let now = Utc::now();

        let event = ConstructionEvent::new(village.id, BuildingName::Woodcutter, 1, 1, now, now);
        village.apply_construction(&event, &catalog).unwrap();

        assert_eq!(village.field_at(1, &catalog).unwrap().level, 1);
        assert_eq!(village.wheat_upkeep, 3 + 2);
        assert_eq!(
            village.population_stats(&catalog).unwrap().population,
            village.wheat_upkeep
        );
        assert_eq!(village.hourly_production(&catalog).unwrap().wood(), 12 - 3 + 7);

        let skip = ConstructionEvent::new(village.id, BuildingName::Woodcutter, 1, 3, now, now);
        assert_eq!(
            village.apply_construction(&skip, &catalog).unwrap_err(),
            GameError::UnexpectedUpgradeLevel {
                slot_id: 1,
                current: 1,
                requested: 3
            }
        );

        let mismatch = ConstructionEvent::new(village.id, BuildingName::Cranny, 1, 2, now, now);
        assert!(matches!(
            village.apply_construction(&mismatch, &catalog),
            Err(GameError::InvalidPlacement { slot_id: 1, .. })
        ));
    }
}
