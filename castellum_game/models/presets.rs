use serde::{Deserialize, Serialize};
use std::fmt;

use castellum_types::{
    buildings::BuildingName,
    errors::GameError,
    map::{ResourceFieldComposition, VillageSize},
};

use super::{
    buildings::BuildingCatalog,
    village::{BuildingField, FIRST_STRUCTURE_SLOT, MAIN_BUILDING_SLOT, RALLY_POINT_SLOT},
};

/// Named template of building fields, expanded lazily for NPC villages.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingFieldsPreset {
    /// All 18 resource fields at a size-dependent level.
    Resources(VillageSize),
    /// Core village structures for a size class.
    Village(VillageSize),
}

impl BuildingFieldsPreset {
    pub fn expand(
        &self,
        composition: &ResourceFieldComposition,
        catalog: &BuildingCatalog,
    ) -> Result<Vec<BuildingField>, GameError> {
        let fields: Vec<BuildingField> = match self {
            BuildingFieldsPreset::Resources(size) => {
                let level = resource_fields_level(size);
                composition
                    .slots()
                    .map(|(slot_id, kind)| {
                        BuildingField::new(slot_id, BuildingName::resource_field_for(kind), level)
                    })
                    .collect()
            }
            BuildingFieldsPreset::Village(size) => village_structures(size)
                .iter()
                .map(|(slot_id, building, level)| BuildingField::new(*slot_id, *building, *level))
                .collect(),
        };

        for field in &fields {
            catalog.level_row(field.building, field.level)?;
        }

        Ok(fields)
    }
}

impl fmt::Display for BuildingFieldsPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingFieldsPreset::Resources(size) => write!(f, "resources-{size}"),
            BuildingFieldsPreset::Village(size) => write!(f, "village-{size}"),
        }
    }
}

fn resource_fields_level(size: &VillageSize) -> u8 {
    match size {
        VillageSize::Xxs => 1,
        VillageSize::Xs => 2,
        VillageSize::Sm => 4,
        VillageSize::Md => 6,
        _ => 10,
    }
}

const WAREHOUSE_SLOT: u8 = FIRST_STRUCTURE_SLOT;
const GRANARY_SLOT: u8 = FIRST_STRUCTURE_SLOT + 1;
const CRANNY_SLOT: u8 = FIRST_STRUCTURE_SLOT + 2;
const SECOND_WAREHOUSE_SLOT: u8 = FIRST_STRUCTURE_SLOT + 3;
const SECOND_GRANARY_SLOT: u8 = FIRST_STRUCTURE_SLOT + 4;

type StructureRow = (u8, BuildingName, u8);

const SMALLEST_STRUCTURES: &[StructureRow] = &[
    (WAREHOUSE_SLOT, BuildingName::Warehouse, 7),
    (GRANARY_SLOT, BuildingName::Granary, 7),
    (CRANNY_SLOT, BuildingName::Cranny, 3),
    (MAIN_BUILDING_SLOT, BuildingName::MainBuilding, 3),
    (RALLY_POINT_SLOT, BuildingName::RallyPoint, 1),
];

const SMALL_STRUCTURES: &[StructureRow] = &[
    (WAREHOUSE_SLOT, BuildingName::Warehouse, 15),
    (GRANARY_SLOT, BuildingName::Granary, 15),
    (CRANNY_SLOT, BuildingName::Cranny, 6),
    (MAIN_BUILDING_SLOT, BuildingName::MainBuilding, 8),
    (RALLY_POINT_SLOT, BuildingName::RallyPoint, 5),
];

const MEDIUM_STRUCTURES: &[StructureRow] = &[
    (WAREHOUSE_SLOT, BuildingName::Warehouse, 20),
    (GRANARY_SLOT, BuildingName::Granary, 20),
    (CRANNY_SLOT, BuildingName::Cranny, 10),
    (MAIN_BUILDING_SLOT, BuildingName::MainBuilding, 12),
    (RALLY_POINT_SLOT, BuildingName::RallyPoint, 10),
];

const LARGE_STRUCTURES: &[StructureRow] = &[
    (WAREHOUSE_SLOT, BuildingName::Warehouse, 20),
    (GRANARY_SLOT, BuildingName::Granary, 20),
    (CRANNY_SLOT, BuildingName::Cranny, 10),
    (SECOND_WAREHOUSE_SLOT, BuildingName::Warehouse, 20),
    (SECOND_GRANARY_SLOT, BuildingName::Granary, 20),
    (MAIN_BUILDING_SLOT, BuildingName::MainBuilding, 20),
    (RALLY_POINT_SLOT, BuildingName::RallyPoint, 15),
];

// Storage is sized so the starting stock of each class fits.
fn village_structures(size: &VillageSize) -> &'static [StructureRow] {
    match size {
        VillageSize::Xxs | VillageSize::Xs => SMALLEST_STRUCTURES,
        VillageSize::Sm => SMALL_STRUCTURES,
        VillageSize::Md => MEDIUM_STRUCTURES,
        _ => LARGE_STRUCTURES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::production;

    #[test]
    fn test_preset_ids() {
        assert_eq!(
            BuildingFieldsPreset::Resources(VillageSize::X2l).to_string(),
            "resources-2xl"
        );
        assert_eq!(
            BuildingFieldsPreset::Village(VillageSize::Sm).to_string(),
            "village-sm"
        );
    }

    #[test]
    fn test_resource_preset_follows_composition() {
        let catalog = BuildingCatalog::standard();
        let composition: ResourceFieldComposition = "11115".parse().unwrap();

        let fields = BuildingFieldsPreset::Resources(VillageSize::Md)
            .expand(&composition, &catalog)
            .unwrap();

        assert_eq!(fields.len(), 18);
        assert!(fields.iter().all(|f| f.level == 6));
        assert_eq!(fields[0].building, BuildingName::Woodcutter);
        assert_eq!(fields[3].building, BuildingName::Cropland);
        assert_eq!(
            fields
                .iter()
                .filter(|f| f.building == BuildingName::Cropland)
                .count(),
            15
        );
    }

    #[test]
    fn test_village_presets_store_starting_resources() {
        let catalog = BuildingCatalog::standard();
        let composition = ResourceFieldComposition::default();

        let cases = [
            (VillageSize::Xxs, 6300),
            (VillageSize::Sm, 31300),
            (VillageSize::Md, 80000),
            (VillageSize::X4l, 160000),
        ];

        for (size, expected) in cases {
            let fields = BuildingFieldsPreset::Village(size)
                .expand(&composition, &catalog)
                .unwrap();
            let capacity = production::storage_capacity(&fields, &catalog).unwrap();
            assert_eq!(capacity.warehouse, expected, "size {size}");
            assert_eq!(capacity.granary, expected, "size {size}");
        }
    }

    #[test]
    fn test_village_presets_stay_off_resource_slots() {
        let catalog = BuildingCatalog::standard();

        let fields = BuildingFieldsPreset::Village(VillageSize::X3l)
            .expand(&ResourceFieldComposition::default(), &catalog)
            .unwrap();

        assert!(fields.iter().all(|f| f.slot_id >= FIRST_STRUCTURE_SLOT));
        assert_eq!(fields[0].slot_id, 19);
        assert_eq!(fields[0].building, BuildingName::Warehouse);
    }

    #[test]
    fn test_expand_checks_levels_against_catalog() {
        let catalog = BuildingCatalog::new(vec![]);
        let result = BuildingFieldsPreset::Village(VillageSize::Xs)
            .expand(&ResourceFieldComposition::default(), &catalog);
        assert!(matches!(result, Err(GameError::UnknownBuilding(_))));
    }
}
