use serde::{Deserialize, Serialize};

use castellum_types::{
    buildings::{BuildingCategory, BuildingName},
    common::{ResourceKind, ResourceSet},
    errors::GameError,
};

use super::{buildings::BuildingCatalog, village::BuildingField};

/// Capacity of warehouse and granary when none is built.
pub const DEFAULT_STORAGE_CAPACITY: u32 = 800;

/// Hourly output of every resource field in `fields`. Level 0 fields
/// contribute their baseline yield.
pub fn hourly_production(
    fields: &[BuildingField],
    catalog: &BuildingCatalog,
) -> Result<ResourceSet, GameError> {
    let mut production = ResourceSet::default();

    for field in fields {
        if catalog.category(field.building)? != BuildingCategory::ResourceField {
            continue;
        }
        let row = catalog.level_row(field.building, field.level)?;
        if let Some(kind) = field.building.produced_resource() {
            production.add(kind, row.value);
        }
    }

    Ok(production)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCapacity {
    pub warehouse: u32,
    pub granary: u32,
}

impl StorageCapacity {
    /// Granary holds wheat, warehouse everything else.
    pub fn for_kind(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wheat => self.granary,
            _ => self.warehouse,
        }
    }
}

impl Default for StorageCapacity {
    fn default() -> Self {
        Self {
            warehouse: DEFAULT_STORAGE_CAPACITY,
            granary: DEFAULT_STORAGE_CAPACITY,
        }
    }
}

pub fn storage_capacity(
    fields: &[BuildingField],
    catalog: &BuildingCatalog,
) -> Result<StorageCapacity, GameError> {
    let mut warehouse = 0;
    let mut granary = 0;

    for field in fields.iter().filter(|f| f.level > 0) {
        match field.building {
            BuildingName::Warehouse => {
                warehouse += catalog.level_row(field.building, field.level)?.value
            }
            BuildingName::Granary => {
                granary += catalog.level_row(field.building, field.level)?.value
            }
            _ => {}
        }
    }

    let or_default = |capacity: u32| {
        if capacity == 0 {
            DEFAULT_STORAGE_CAPACITY
        } else {
            capacity
        }
    };

    Ok(StorageCapacity {
        warehouse: or_default(warehouse),
        granary: or_default(granary),
    })
}
