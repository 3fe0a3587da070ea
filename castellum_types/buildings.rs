use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::ResourceKind;

/// Concurrency class of a building. Resource fields and village structures
/// are queued on separate timelines by tribes with parallel construction.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum BuildingCategory {
    ResourceField,
    VillageStructure,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum BuildingName {
    Woodcutter,
    ClayPit,
    IronMine,
    Cropland,
    MainBuilding,
    RallyPoint,
    Warehouse,
    Granary,
    Cranny,
    Marketplace,
    CityWall,
    EarthWall,
    Palisade,
    MakeshiftWall,
    StoneWall,
}

impl BuildingName {
    /// Resource produced by a resource field building.
    pub fn produced_resource(&self) -> Option<ResourceKind> {
        match self {
            BuildingName::Woodcutter => Some(ResourceKind::Wood),
            BuildingName::ClayPit => Some(ResourceKind::Clay),
            BuildingName::IronMine => Some(ResourceKind::Iron),
            BuildingName::Cropland => Some(ResourceKind::Wheat),
            _ => None,
        }
    }

    /// Resource field building for a given resource type slot.
    pub fn resource_field_for(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Wood => BuildingName::Woodcutter,
            ResourceKind::Clay => BuildingName::ClayPit,
            ResourceKind::Iron => BuildingName::IronMine,
            ResourceKind::Wheat => BuildingName::Cropland,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            BuildingName::CityWall
                | BuildingName::EarthWall
                | BuildingName::Palisade
                | BuildingName::MakeshiftWall
                | BuildingName::StoneWall
        )
    }
}

impl fmt::Display for BuildingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildingName::Woodcutter => "Woodcutter",
            BuildingName::ClayPit => "Clay Pit",
            BuildingName::IronMine => "Iron Mine",
            BuildingName::Cropland => "Cropland",
            BuildingName::MainBuilding => "Main Building",
            BuildingName::RallyPoint => "Rally Point",
            BuildingName::Warehouse => "Warehouse",
            BuildingName::Granary => "Granary",
            BuildingName::Cranny => "Cranny",
            BuildingName::Marketplace => "Marketplace",
            BuildingName::CityWall => "City Wall",
            BuildingName::EarthWall => "Earth Wall",
            BuildingName::Palisade => "Palisade",
            BuildingName::MakeshiftWall => "Makeshift Wall",
            BuildingName::StoneWall => "Stone Wall",
        };

        f.write_str(name)
    }
}
