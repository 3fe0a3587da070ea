use serde::{Deserialize, Serialize};
use uuid::Uuid;

use castellum_types::map::{Position, ResourceFieldComposition, VillageSize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valley {
    pub id: u32,
    pub position: Position,
    pub composition: ResourceFieldComposition,
    pub player_id: Option<Uuid>,
}

impl Valley {
    pub fn new(position: Position, composition: ResourceFieldComposition, world_size: i32) -> Self {
        Self {
            id: position.to_id(world_size),
            position,
            composition,
            player_id: None,
        }
    }
}

/// Decides the size class of an NPC village from where it stands.
pub trait SizeClassifier {
    fn size_of(&self, world_size: i32, position: &Position) -> VillageSize;
}

/// Villages grow bigger the closer they are to the centre of the map.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceSizeClassifier;

impl SizeClassifier for DistanceSizeClassifier {
    fn size_of(&self, world_size: i32, position: &Position) -> VillageSize {
        let origin = Position { x: 0, y: 0 };
        let ratio = position.distance(&origin, world_size) as f64 / world_size.max(1) as f64;

        match ratio {
            r if r < 0.05 => VillageSize::X4l,
            r if r < 0.1 => VillageSize::X3l,
            r if r < 0.15 => VillageSize::X2l,
            r if r < 0.25 => VillageSize::Xl,
            r if r < 0.35 => VillageSize::Lg,
            r if r < 0.5 => VillageSize::Md,
            r if r < 0.65 => VillageSize::Sm,
            r if r < 0.8 => VillageSize::Xs,
            _ => VillageSize::Xxs,
        }
    }
}
