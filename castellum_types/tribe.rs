use serde::{Deserialize, Serialize};

use crate::buildings::BuildingName;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum Tribe {
    Roman,
    Gaul,
    Teuton,
    Hun,
    Egyptian,
    Natar,
    Nature,
}

impl Tribe {
    pub fn is_playable(&self) -> bool {
        !matches!(self, Tribe::Natar | Tribe::Nature)
    }

    /// Defensive structure built on the wall slot. Nature has no villages.
    pub fn wall(&self) -> Option<BuildingName> {
        match self {
            Tribe::Roman => Some(BuildingName::CityWall),
            Tribe::Gaul => Some(BuildingName::Palisade),
            Tribe::Teuton => Some(BuildingName::EarthWall),
            Tribe::Hun => Some(BuildingName::MakeshiftWall),
            Tribe::Egyptian => Some(BuildingName::StoneWall),
            Tribe::Natar => Some(BuildingName::StoneWall),
            Tribe::Nature => None,
        }
    }

    /// Romans can upgrade a resource field and a village structure at the same time.
    pub fn has_parallel_construction(&self) -> bool {
        matches!(self, Tribe::Roman)
    }
}
