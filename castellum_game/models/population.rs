use serde::{Deserialize, Serialize};

use castellum_types::errors::GameError;

use super::{buildings::BuildingCatalog, village::BuildingField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub population: u32,
    pub culture_points: u32,
}

/// Sums population and culture points of every built field. Unbuilt
/// (level 0) fields count for nothing.
pub fn aggregate(
    fields: &[BuildingField],
    catalog: &BuildingCatalog,
) -> Result<PopulationStats, GameError> {
    let mut stats = PopulationStats::default();

    for field in fields {
        let definition = catalog.definition(field.building)?;
        if field.level == 0 {
            continue;
        }

        let row = definition.level(field.level)?;
        stats.population += row.population;
        stats.culture_points += row.culture_points;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use castellum_types::buildings::BuildingName;

    #[test]
    fn test_fresh_village_core() {
        let catalog = BuildingCatalog::standard();
        let fields = vec![
            BuildingField::new(1, BuildingName::Woodcutter, 0),
            BuildingField::new(38, BuildingName::MainBuilding, 1),
            BuildingField::new(39, BuildingName::RallyPoint, 1),
            BuildingField::new(40, BuildingName::CityWall, 0),
        ];

        assert_eq!(
            aggregate(&fields, &catalog).unwrap(),
            PopulationStats {
                population: 3,
                culture_points: 3
            }
        );
    }

    #[test]
    fn test_aggregate_uses_cumulative_rows() {
        let catalog = BuildingCatalog::standard();
        let fields = vec![
            BuildingField::new(1, BuildingName::Woodcutter, 3),
            BuildingField::new(2, BuildingName::Woodcutter, 1),
        ];

        let stats = aggregate(&fields, &catalog).unwrap();
        assert_eq!(stats.population, 4 + 2);
        assert_eq!(stats.culture_points, 4 + 1);
    }

    #[test]
    fn test_empty_layout() {
        let catalog = BuildingCatalog::standard();
        assert_eq!(
            aggregate(&[], &catalog).unwrap(),
            PopulationStats::default()
        );
    }

    #[test]
    fn test_unknown_building_fails_even_at_level_zero() {
        let catalog = BuildingCatalog::new(vec![]);
        let fields = vec![BuildingField::new(21, BuildingName::Cranny, 0)];
        assert_eq!(
            aggregate(&fields, &catalog).unwrap_err(),
            GameError::UnknownBuilding(BuildingName::Cranny)
        );
    }
}
