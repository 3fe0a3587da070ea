use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use castellum_types::{
    buildings::{BuildingCategory, BuildingName},
    common::ResourceSet,
    map::{Position, ResourceFieldComposition},
    tribe::Tribe,
};

use crate::models::{
    buildings::{BuildingCatalog, BuildingDefinition, LevelRow},
    factory::{FactorySettings, VillageFactory},
    map::Valley,
    player::Player,
    village::Village,
};

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub username: Option<&'a str>,
    pub tribe: Option<Tribe>,
    pub is_npc: Option<bool>,
}

#[derive(Default, Clone)]
pub struct ValleyFactoryOptions {
    pub position: Option<Position>,
    pub composition: Option<ResourceFieldComposition>,
    pub player_id: Option<Uuid>,
    pub world_size: Option<i32>,
}

#[derive(Default, Clone)]
pub struct VillageFactoryOptions {
    pub player: Option<Player>,
    pub tribe: Option<Tribe>,
    pub valley: Option<Valley>,
    pub settings: Option<FactorySettings>,
    pub now: Option<DateTime<Utc>>,
}

pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let default_username: String = format!("user_{}", rand::thread_rng().r#gen::<u32>());
    Player {
        id: options.id.unwrap_or_else(Uuid::new_v4),
        username: options.username.map_or(default_username, |s| s.to_string()),
        tribe: options.tribe.unwrap_or(Tribe::Roman),
        is_npc: options.is_npc.unwrap_or(false),
    }
}

pub fn valley_factory(options: ValleyFactoryOptions) -> Valley {
    let position = options.position.unwrap_or(Position { x: 0, y: 0 });
    let world_size = options.world_size.unwrap_or(100);

    Valley {
        id: position.to_id(world_size),
        position,
        composition: options.composition.unwrap_or_default(),
        player_id: options.player_id,
    }
}

/// A fresh player village built through [`VillageFactory`] with the standard catalog.
pub fn village_factory(options: VillageFactoryOptions) -> Village {
    let mut player = options
        .player
        .unwrap_or_else(|| player_factory(Default::default()));
    if let Some(tribe) = options.tribe {
        player.tribe = tribe;
    }

    let catalog = BuildingCatalog::standard();
    let factory = VillageFactory::new(&catalog, options.settings.unwrap_or_default());

    factory
        .player_village(
            &player,
            &options
                .valley
                .unwrap_or_else(|| valley_factory(Default::default())),
            options.now.unwrap_or_else(Utc::now),
        )
        .unwrap()
}

/// Definition whose level `n` costs `n` of every resource and takes
/// `duration_secs * n` seconds.
pub fn linear_definition(
    name: BuildingName,
    category: BuildingCategory,
    max_level: u8,
    duration_secs: u32,
) -> BuildingDefinition {
    let levels = (0..=max_level as u32)
        .map(|level| LevelRow {
            cost: ResourceSet::splat(level),
            duration_secs: duration_secs * level,
            population: level,
            culture_points: level,
            value: level,
        })
        .collect();

    BuildingDefinition::new(name, category, levels)
}
