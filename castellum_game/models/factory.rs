use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use castellum_types::{
    buildings::BuildingName,
    common::ResourceSet,
    errors::GameError,
    map::{ResourceFieldComposition, VillageSize},
};

use super::{
    buildings::BuildingCatalog,
    map::{DistanceSizeClassifier, SizeClassifier, Valley},
    player::Player,
    population,
    presets::BuildingFieldsPreset,
    village::{
        BuildingField, MAIN_BUILDING_SLOT, RALLY_POINT_SLOT, Village, VillageLayout, VillageSeed,
        WALL_SLOT,
    },
};

/// Wheat upkeep assigned to new NPC villages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcUpkeepPolicy {
    Fixed(u32),
    /// Upkeep equals the population of the village layout.
    FromPopulation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorySettings {
    pub world_size: i32,
    pub player_starting_resources: u32,
    pub npc_upkeep: NpcUpkeepPolicy,
    pub is_capital: bool,
}

impl Default for FactorySettings {
    fn default() -> Self {
        Self {
            world_size: 100,
            player_starting_resources: 750,
            npc_upkeep: NpcUpkeepPolicy::FromPopulation,
            is_capital: false,
        }
    }
}

/// Builds new player and NPC villages.
pub struct VillageFactory<'a, C = DistanceSizeClassifier> {
    catalog: &'a BuildingCatalog,
    settings: FactorySettings,
    classifier: C,
}

impl<'a> VillageFactory<'a> {
    pub fn new(catalog: &'a BuildingCatalog, settings: FactorySettings) -> Self {
        Self::with_classifier(catalog, settings, DistanceSizeClassifier)
    }
}

impl<'a, C: SizeClassifier> VillageFactory<'a, C> {
    pub fn with_classifier(
        catalog: &'a BuildingCatalog,
        settings: FactorySettings,
        classifier: C,
    ) -> Self {
        Self {
            catalog,
            settings,
            classifier,
        }
    }

    pub fn settings(&self) -> &FactorySettings {
        &self.settings
    }

    /// A brand new village: unbuilt resource fields, main building and rally
    /// point at level 1 and an unbuilt wall.
    pub fn player_village(
        &self,
        player: &Player,
        valley: &Valley,
        now: DateTime<Utc>,
    ) -> Result<Village, GameError> {
        if !player.tribe.is_playable() {
            return Err(GameError::NonPlayableTribe(player.tribe));
        }

        let mut fields = resource_fields(&valley.composition);
        fields.push(BuildingField::new(
            MAIN_BUILDING_SLOT,
            BuildingName::MainBuilding,
            1,
        ));
        fields.push(BuildingField::new(
            RALLY_POINT_SLOT,
            BuildingName::RallyPoint,
            1,
        ));
        fields.push(wall_field(player, 0)?);

        let wheat_upkeep = population::aggregate(&fields, self.catalog)?.population;

        Village::new(
            VillageSeed {
                id: valley.id,
                name: player.village_name(),
                player_id: player.id,
                position: valley.position.clone(),
                tribe: player.tribe,
                composition: valley.composition,
                layout: VillageLayout::Materialized(fields),
                resources: ResourceSet::splat(self.settings.player_starting_resources),
                is_capital: self.settings.is_capital,
                wheat_upkeep,
            },
            self.catalog,
            now,
        )
    }

    /// A pre-generated village sized by its distance class. Only the wall is
    /// placed explicitly, the rest stays as unexpanded presets.
    pub fn npc_village(
        &self,
        player: &Player,
        valley: &Valley,
        now: DateTime<Utc>,
    ) -> Result<Village, GameError> {
        let size = self
            .classifier
            .size_of(self.settings.world_size, &valley.position);

        let layout = VillageLayout::Deferred {
            fields: vec![wall_field(player, npc_wall_level(&size))?],
            presets: vec![
                BuildingFieldsPreset::Resources(size),
                BuildingFieldsPreset::Village(size),
            ],
        };

        let wheat_upkeep = match self.settings.npc_upkeep {
            NpcUpkeepPolicy::Fixed(upkeep) => upkeep,
            NpcUpkeepPolicy::FromPopulation => {
                let fields = layout.expand(&valley.composition, self.catalog)?;
                population::aggregate(&fields, self.catalog)?.population
            }
        };

        Village::new(
            VillageSeed {
                id: valley.id,
                name: player.village_name(),
                player_id: player.id,
                position: valley.position.clone(),
                tribe: player.tribe,
                composition: valley.composition,
                layout,
                resources: ResourceSet::splat(npc_starting_resources(&size)),
                is_capital: false,
                wheat_upkeep,
            },
            self.catalog,
            now,
        )
    }

    /// One NPC village for every tile owned by an NPC. Unowned tiles and
    /// tiles owned by real players are skipped.
    pub fn generate_npc_villages(
        &self,
        tiles: &[Valley],
        players: &[Player],
        now: DateTime<Utc>,
    ) -> Result<Vec<Village>, GameError> {
        let mut villages = Vec::new();

        for tile in tiles {
            let Some(owner_id) = tile.player_id else {
                continue;
            };

            let owner = players
                .iter()
                .find(|p| p.id == owner_id)
                .ok_or(GameError::UnknownOwner {
                    tile_id: tile.id,
                    player_id: owner_id,
                })?;

            if owner.is_npc {
                villages.push(self.npc_village(owner, tile, now)?);
            }
        }

        Ok(villages)
    }
}

fn resource_fields(composition: &ResourceFieldComposition) -> Vec<BuildingField> {
    composition
        .slots()
        .map(|(slot_id, kind)| {
            BuildingField::new(slot_id, BuildingName::resource_field_for(kind), 0)
        })
        .collect()
}

fn wall_field(player: &Player, level: u8) -> Result<BuildingField, GameError> {
    let wall = player
        .tribe
        .wall()
        .ok_or(GameError::NonPlayableTribe(player.tribe))?;
    Ok(BuildingField::new(WALL_SLOT, wall, level))
}

fn npc_starting_resources(size: &VillageSize) -> u32 {
    match size {
        VillageSize::Xxs | VillageSize::Xs => 6_300,
        VillageSize::Sm => 31_300,
        VillageSize::Md => 80_000,
        _ => 160_000,
    }
}

fn npc_wall_level(size: &VillageSize) -> u8 {
    match size {
        VillageSize::Xxs | VillageSize::Xs => 5,
        VillageSize::Sm => 10,
        VillageSize::Md => 15,
        _ => 20,
    }
}
