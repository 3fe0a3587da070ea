use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use castellum_types::{
    buildings::{BuildingCategory, BuildingName},
    common::ResourceSet,
    errors::GameError,
};

/// One row of a building definition. Population and culture points are
/// cumulative: they already include every level below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    pub cost: ResourceSet,
    pub duration_secs: u32,
    pub population: u32,
    pub culture_points: u32,
    /// Hourly yield for resource fields, storage capacity for warehouse and
    /// granary. Other buildings carry their own table value.
    pub value: u32,
}

/// Per-level table of a building. Index 0 is the unbuilt baseline, so the
/// max level is `levels.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingDefinition {
    name: BuildingName,
    category: BuildingCategory,
    levels: Vec<LevelRow>,
}

impl BuildingDefinition {
    pub fn new(name: BuildingName, category: BuildingCategory, mut levels: Vec<LevelRow>) -> Self {
        if levels.is_empty() {
            levels.push(LevelRow::default());
        }
        Self {
            name,
            category,
            levels,
        }
    }

    pub fn name(&self) -> BuildingName {
        self.name
    }

    pub fn category(&self) -> BuildingCategory {
        self.category
    }

    pub fn max_level(&self) -> u8 {
        (self.levels.len() - 1).min(u8::MAX as usize) as u8
    }

    pub fn levels(&self) -> &[LevelRow] {
        &self.levels
    }

    pub fn level(&self, level: u8) -> Result<&LevelRow, GameError> {
        self.levels
            .get(level as usize)
            .ok_or(GameError::LevelOutOfRange {
                building: self.name,
                level,
                max_level: self.max_level(),
            })
    }

    /// Builds a definition from static rows, normalizing structures (whose
    /// tables start at level 1) and accumulating population and culture points.
    fn from_static(name: BuildingName, data: &BuildingData) -> Self {
        let shifted = data.category == BuildingCategory::VillageStructure;
        let mut levels = Vec::with_capacity(data.data.len() + 1);
        if shifted {
            levels.push(LevelRow::default());
        }

        let mut population = 0;
        let mut culture_points = 0;
        for (idx, row) in data.data.iter().enumerate() {
            // resource fields already carry their level 0 row
            if shifted || idx > 0 {
                population += row.4;
                culture_points += row.5;
            }

            levels.push(LevelRow {
                cost: ResourceSet::new(row.0, row.1, row.2, row.3),
                duration_secs: row.7,
                population,
                culture_points,
                value: row.6,
            });
        }

        Self::new(name, data.category, levels)
    }
}

/// Reference data for every building, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct BuildingCatalog {
    definitions: HashMap<BuildingName, BuildingDefinition>,
}

impl BuildingCatalog {
    pub fn new(definitions: impl IntoIterator<Item = BuildingDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(|d| (d.name, d)).collect(),
        }
    }

    /// Catalog with the stock game tables.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_BUILDINGS
                .iter()
                .map(|(name, data)| BuildingDefinition::from_static(*name, data)),
        )
    }

    pub fn definition(&self, name: BuildingName) -> Result<&BuildingDefinition, GameError> {
        self.definitions
            .get(&name)
            .ok_or(GameError::UnknownBuilding(name))
    }

    pub fn level_row(&self, name: BuildingName, level: u8) -> Result<&LevelRow, GameError> {
        self.definition(name)?.level(level)
    }

    pub fn category(&self, name: BuildingName) -> Result<BuildingCategory, GameError> {
        Ok(self.definition(name)?.category())
    }

    pub fn max_level(&self, name: BuildingName) -> Result<u8, GameError> {
        Ok(self.definition(name)?.max_level())
    }

    pub fn insert(&mut self, definition: BuildingDefinition) {
        self.definitions.insert(definition.name, definition);
    }
}

// wood, clay, iron, wheat, upkeep, culture_points, value, time
#[derive(Debug, Clone)]
struct LevelData(u32, u32, u32, u32, u32, u32, u32, u32);

#[derive(Debug, Clone)]
struct BuildingData {
    data: &'static [LevelData],
    category: BuildingCategory,
}

static STANDARD_BUILDINGS: &[(BuildingName, &BuildingData)] = &[
    (BuildingName::Woodcutter, &WOODCUTTER),
    (BuildingName::ClayPit, &CLAY_PIT),
    (BuildingName::IronMine, &IRON_MINE),
    (BuildingName::Cropland, &CROPLAND),
    (BuildingName::MainBuilding, &MAIN_BUILDING),
    (BuildingName::RallyPoint, &RALLY_POINT),
    (BuildingName::Warehouse, &WAREHOUSE),
    (BuildingName::Granary, &GRANARY),
    (BuildingName::Cranny, &CRANNY),
    (BuildingName::Marketplace, &MARKETPLACE),
    (BuildingName::CityWall, &CITY_WALL),
    (BuildingName::EarthWall, &EARTH_WALL),
    (BuildingName::Palisade, &PALISADE),
    (BuildingName::MakeshiftWall, &MAKESHIFT_WALL),
    (BuildingName::StoneWall, &STONE_WALL),
];


// ==================== BEGIN BUILDINGS STATIC DATA ====================

static WOODCUTTER: BuildingData = BuildingData {
    data: &[
        LevelData(0, 0, 0, 0, 0, 0, 3, 0),
        LevelData(40, 100, 50, 60, 2, 1, 7, 260),
        LevelData(65, 165, 85, 100, 1, 1, 13, 420),
        LevelData(110, 280, 140, 165, 1, 2, 21, 670),
        LevelData(185, 465, 235, 280, 1, 2, 31, 1060),
        LevelData(310, 780, 390, 465, 1, 2, 46, 1650),
        LevelData(520, 1300, 650, 780, 2, 3, 70, 2560),
        LevelData(870, 2170, 1085, 1300, 2, 4, 98, 3970),
        LevelData(1450, 3625, 1810, 2175, 2, 4, 140, 6150),
        LevelData(2420, 6050, 3025, 3630, 2, 5, 203, 9530),
        LevelData(4040, 10105, 5050, 6060, 2, 6, 280, 14770),
        LevelData(6750, 16870, 8435, 10125, 2, 7, 392, 22890),
        LevelData(11270, 28175, 14090, 16905, 2, 9, 525, 35480),
        LevelData(18820, 47055, 23525, 28230, 2, 11, 693, 54990),
        LevelData(31430, 78580, 39290, 47150, 2, 13, 889, 85240),
        LevelData(52490, 131230, 65615, 78740, 2, 15, 1120, 132120),
        LevelData(87660, 219155, 109575, 131490, 3, 18, 1400, 204790),
        LevelData(146395, 365985, 182995, 219590, 3, 22, 1820, 317430),
        LevelData(244480, 611195, 305600, 366715, 3, 27, 2240, 492010),
        LevelData(408280, 1020695, 510350, 612420, 3, 32, 2800, 762620),
        LevelData(681825, 1704565, 852280, 1022740, 3, 38, 3430, 1182060),
    ],
    category: BuildingCategory::ResourceField,
};

static CLAY_PIT: BuildingData = BuildingData {
    data: &[
        LevelData(0, 0, 0, 0, 0, 0, 3, 0),
        LevelData(80, 40, 80, 50, 2, 1, 7, 220),
        LevelData(135, 65, 135, 85, 1, 1, 13, 350),
        LevelData(225, 110, 225, 140, 1, 2, 21, 560),
        LevelData(375, 185, 375, 235, 1, 2, 31, 900),
        LevelData(620, 310, 620, 390, 1, 2, 46, 1400),
        LevelData(1040, 520, 1040, 650, 2, 3, 70, 2160),
        LevelData(1735, 870, 1735, 1085, 2, 4, 98, 3360),
        LevelData(2900, 1450, 2900, 1810, 2, 4, 140, 5200),
        LevelData(4840, 2420, 4840, 3025, 2, 5, 203, 8060),
        LevelData(8080, 4040, 8080, 5050, 2, 6, 280, 12500),
        LevelData(13500, 6750, 13500, 8435, 2, 7, 392, 19370),
        LevelData(22540, 11270, 22540, 14090, 2, 9, 525, 30020),
        LevelData(37645, 18820, 37645, 23525, 2, 11, 693, 46530),
        LevelData(62865, 31430, 62865, 39290, 2, 13, 889, 72130),
        LevelData(104985, 52490, 104985, 65615, 2, 15, 1120, 111800),
        LevelData(175320, 87660, 175320, 109575, 3, 18, 1400, 173290),
        LevelData(292790, 146395, 292790, 182995, 3, 22, 1820, 268590),
        LevelData(488955, 244480, 488955, 305600, 3, 27, 2240, 416320),
        LevelData(816555, 408280, 816555, 510350, 3, 32, 2800, 645290),
        LevelData(1363650, 681825, 1363650, 852280, 3, 38, 3430, 1000210),
    ],
    category: BuildingCategory::ResourceField,
};

static IRON_MINE: BuildingData = BuildingData {
    data: &[
        LevelData(0, 0, 0, 0, 0, 0, 3, 0),
        LevelData(100, 80, 30, 60, 3, 1, 7, 450),
        LevelData(165, 135, 50, 100, 1, 1, 13, 720),
        LevelData(280, 225, 85, 165, 1, 2, 21, 1150),
        LevelData(465, 375, 140, 280, 1, 2, 31, 1840),
        LevelData(780, 620, 235, 465, 1, 2, 46, 2860),
        LevelData(1300, 1040, 390, 780, 2, 3, 70, 4430),
        LevelData(2170, 1735, 650, 1300, 2, 4, 98, 6860),
        LevelData(3625, 2900, 1085, 2175, 2, 4, 140, 10640),
        LevelData(6050, 4840, 1815, 3630, 2, 5, 203, 16490),
        LevelData(10105, 8080, 3030, 6060, 2, 6, 280, 25560),
        LevelData(16870, 13500, 5060, 10125, 2, 7, 392, 39620),
        LevelData(28175, 22540, 8455, 16905, 2, 9, 525, 61410),
        LevelData(47055, 37645, 14115, 28230, 2, 11, 693, 95180),
        LevelData(78580, 62865, 23575, 47150, 2, 13, 889, 147530),
        LevelData(131230, 104985, 39370, 78740, 2, 15, 1120, 228680),
        LevelData(219155, 175320, 65745, 131490, 3, 18, 1400, 354450),
        LevelData(365985, 292790, 109795, 219590, 3, 22, 1820, 549390),
        LevelData(611195, 488955, 183360, 366715, 3, 27, 2240, 851560),
        LevelData(1020695, 816555, 306210, 612420, 3, 32, 2800, 1319920),
        LevelData(1704565, 1363650, 511370, 1022740, 3, 38, 3430, 2045880),
    ],
    category: BuildingCategory::ResourceField,
};

static CROPLAND: BuildingData = BuildingData {
    data: &[
        LevelData(0, 0, 0, 0, 0, 0, 3, 0),
        LevelData(70, 90, 70, 20, 0, 1, 7, 150),
        LevelData(115, 150, 115, 35, 0, 1, 13, 240),
        LevelData(195, 250, 195, 55, 0, 2, 21, 380),
        LevelData(325, 420, 325, 95, 0, 2, 31, 610),
        LevelData(545, 700, 545, 155, 0, 2, 46, 950),
        LevelData(910, 1170, 910, 260, 1, 3, 70, 1480),
        LevelData(1520, 1950, 1520, 435, 1, 4, 98, 2290),
        LevelData(2535, 3260, 2535, 725, 1, 4, 140, 3550),
        LevelData(4235, 5445, 4235, 1210, 1, 5, 203, 5500),
        LevelData(7070, 9095, 7070, 2020, 1, 6, 280, 8520),
        LevelData(11810, 15185, 11810, 3375, 1, 7, 392, 13210),
        LevelData(19725, 25360, 19725, 5635, 1, 9, 525, 20470),
        LevelData(32940, 42350, 32940, 9410, 1, 11, 693, 31730),
        LevelData(55005, 70720, 55005, 15715, 1, 13, 889, 49180),
        LevelData(91860, 118105, 91860, 26245, 1, 15, 1120, 76230),
        LevelData(153405, 197240, 153405, 43830, 2, 18, 1400, 118150),
        LevelData(256190, 329385, 256190, 73195, 2, 22, 1820, 183130),
        LevelData(427835, 550075, 427835, 122240, 2, 27, 2240, 283850),
        LevelData(714485, 918625, 714485, 204140, 2, 32, 2800, 439970),
        LevelData(1193195, 1534105, 1193195, 340915, 2, 38, 3430, 681960),
    ],
    category: BuildingCategory::ResourceField,
};

static MAIN_BUILDING: BuildingData = BuildingData {
    data: &[
        LevelData(70, 40, 60, 20, 2, 2, 1000, 2620),
        LevelData(90, 50, 75, 25, 1, 3, 964, 3220),
        LevelData(115, 65, 100, 35, 1, 3, 929, 3880),
        LevelData(145, 85, 125, 40, 1, 4, 896, 4610),
        LevelData(190, 105, 160, 55, 1, 5, 864, 5410),
        LevelData(240, 135, 205, 70, 2, 6, 833, 6300),
        LevelData(310, 175, 265, 90, 2, 7, 803, 7280),
        LevelData(395, 225, 340, 115, 2, 9, 774, 8380),
        LevelData(505, 290, 430, 145, 2, 10, 746, 9590),
        LevelData(645, 370, 555, 185, 2, 12, 719, 10940),
        LevelData(825, 470, 710, 235, 2, 15, 693, 12440),
        LevelData(1060, 605, 905, 300, 2, 18, 668, 14120),
        LevelData(1355, 775, 1160, 385, 2, 21, 644, 15980),
        LevelData(1735, 990, 1485, 495, 2, 26, 621, 18050),
        LevelData(2220, 1270, 1900, 635, 2, 31, 599, 20370),
        LevelData(2840, 1625, 2435, 810, 3, 37, 577, 22950),
        LevelData(3635, 2075, 3115, 1040, 3, 44, 556, 25830),
        LevelData(4650, 2660, 3990, 1330, 3, 53, 536, 29040),
        LevelData(5955, 3405, 5105, 1700, 3, 64, 517, 32630),
        LevelData(7620, 4355, 6535, 2180, 3, 77, 498, 32632),
    ],
    category: BuildingCategory::VillageStructure,
};

static WAREHOUSE: BuildingData = BuildingData {
    data: &[
        LevelData(130, 160, 90, 40, 1, 1, 1200, 2000),
        LevelData(165, 205, 115, 50, 1, 1, 1700, 2620),
        LevelData(215, 260, 145, 65, 1, 2, 2300, 3340),
        LevelData(275, 335, 190, 85, 1, 2, 3100, 4170),
        LevelData(350, 430, 240, 105, 1, 2, 4000, 5140),
        LevelData(445, 550, 310, 135, 1, 3, 5000, 6260),
        LevelData(570, 705, 395, 175, 1, 4, 6300, 7570),
        LevelData(730, 900, 505, 225, 1, 4, 7800, 9080),
        LevelData(935, 1115, 650, 290, 1, 5, 9600, 10830),
        LevelData(1200, 1475, 830, 370, 1, 6, 11800, 12860),
        LevelData(1535, 1890, 1065, 470, 2, 7, 14400, 15220),
        LevelData(1965, 2420, 1360, 605, 2, 9, 17600, 17950),
        LevelData(2515, 3095, 1740, 775, 2, 11, 21400, 21130),
        LevelData(3220, 3960, 2230, 990, 2, 13, 25900, 24810),
        LevelData(4120, 5070, 2850, 1270, 2, 15, 31300, 29080),
        LevelData(5275, 6490, 3650, 1625, 2, 18, 37900, 34030),
        LevelData(6750, 8310, 4675, 2075, 2, 22, 45700, 39770),
        LevelData(8640, 10635, 5980, 2660, 2, 27, 55100, 46440),
        LevelData(11060, 13610, 7655, 3405, 2, 32, 66400, 54170),
        LevelData(14155, 17420, 9800, 4355, 2, 38, 80000, 63130),
    ],
    category: BuildingCategory::VillageStructure,
};

static GRANARY: BuildingData = BuildingData {
    data: &[
        LevelData(80, 100, 70, 20, 1, 1, 1200, 1600),
        LevelData(100, 130, 90, 25, 1, 1, 1700, 2160),
        LevelData(130, 165, 115, 35, 1, 2, 2300, 2800),
        LevelData(170, 210, 145, 40, 1, 2, 3100, 3550),
        LevelData(215, 270, 190, 55, 1, 2, 4000, 4420),
        LevelData(275, 345, 240, 70, 1, 3, 5000, 5420),
        LevelData(350, 440, 310, 90, 1, 4, 6300, 6590),
        LevelData(450, 565, 395, 115, 1, 4, 7800, 7950),
        LevelData(575, 720, 505, 145, 1, 5, 9600, 9520),
        LevelData(740, 920, 645, 185, 1, 6, 11800, 11340),
        LevelData(945, 1180, 825, 235, 2, 7, 14400, 13450),
        LevelData(1210, 1510, 1060, 300, 2, 9, 17600, 15910),
        LevelData(1545, 1935, 1355, 385, 2, 11, 21400, 18750),
        LevelData(1980, 2475, 1735, 495, 2, 13, 25900, 22050),
        LevelData(2535, 3170, 2220, 635, 2, 15, 31300, 25880),
        LevelData(3245, 4055, 2840, 810, 2, 18, 37900, 30320),
        LevelData(4155, 5190, 3635, 1040, 2, 22, 45700, 35470),
        LevelData(5315, 6645, 4650, 1330, 2, 27, 55100, 41450),
        LevelData(6805, 8505, 5955, 1700, 2, 32, 66400, 48380),
        LevelData(8710, 10890, 7620, 2180, 2, 38, 80000, 56420),
    ],
    category: BuildingCategory::VillageStructure,
};

static CRANNY: BuildingData = BuildingData {
    data: &[
        LevelData(40, 50, 30, 10, 0, 1, 100, 750),
        LevelData(50, 65, 40, 15, 0, 1, 130, 1170),
        LevelData(65, 80, 50, 15, 0, 2, 170, 1660),
        LevelData(85, 105, 65, 20, 0, 2, 220, 2220),
        LevelData(105, 135, 80, 25, 0, 2, 280, 2880),
        LevelData(135, 170, 105, 35, 1, 3, 360, 3640),
        LevelData(175, 220, 130, 45, 1, 4, 460, 4520),
        LevelData(225, 280, 170, 55, 1, 4, 600, 5540),
        LevelData(290, 360, 215, 70, 1, 5, 770, 6730),
        LevelData(370, 460, 275, 90, 1, 6, 1000, 8110),
    ],
    category: BuildingCategory::VillageStructure,
};

static MARKETPLACE: BuildingData = BuildingData {
    data: &[
        LevelData(80, 70, 120, 70, 4, 4, 1, 1800),
        LevelData(100, 90, 155, 90, 2, 4, 2, 2390),
        LevelData(130, 115, 195, 115, 2, 5, 3, 3070),
        LevelData(170, 145, 250, 145, 2, 6, 4, 3860),
        LevelData(215, 190, 320, 190, 2, 7, 5, 4780),
        LevelData(275, 240, 410, 240, 3, 9, 6, 5840),
        LevelData(350, 310, 530, 310, 3, 11, 7, 7080),
        LevelData(450, 395, 675, 395, 3, 13, 8, 8510),
        LevelData(575, 505, 865, 505, 3, 15, 9, 10170),
        LevelData(740, 645, 1105, 645, 3, 19, 10, 12100),
        LevelData(945, 825, 1415, 825, 3, 22, 11, 14340),
        LevelData(1210, 1060, 1815, 1060, 3, 27, 12, 16930),
        LevelData(1545, 1355, 2320, 1355, 3, 32, 13, 19940),
        LevelData(1980, 1735, 2970, 1735, 3, 39, 14, 23430),
        LevelData(2535, 2220, 3805, 2220, 3, 46, 15, 27480),
        LevelData(3245, 2840, 4870, 2840, 4, 55, 16, 32180),
        LevelData(4155, 3635, 6230, 3635, 4, 67, 17, 37620),
        LevelData(5315, 4650, 7975, 4650, 4, 80, 18, 43940),
        LevelData(6805, 5955, 10210, 5955, 4, 96, 19, 51270),
        LevelData(8710, 7620, 13065, 7620, 4, 115, 20, 59780),
    ],
    category: BuildingCategory::VillageStructure,
};

static CITY_WALL: BuildingData = BuildingData {
    data: &[
        LevelData(70, 90, 170, 70, 0, 1, 3, 2000),
        LevelData(90, 115, 220, 90, 0, 1, 6, 2620),
        LevelData(115, 145, 280, 115, 0, 2, 9, 3340),
        LevelData(145, 190, 355, 145, 0, 2, 13, 4170),
        LevelData(190, 240, 455, 190, 0, 2, 16, 5140),
        LevelData(240, 310, 585, 240, 1, 3, 19, 6260),
        LevelData(310, 395, 750, 310, 1, 4, 23, 7570),
        LevelData(395, 505, 955, 395, 1, 4, 27, 9080),
        LevelData(505, 650, 1225, 505, 1, 5, 30, 10830),
        LevelData(645, 830, 1570, 645, 1, 6, 34, 12860),
        LevelData(825, 1065, 2005, 825, 1, 7, 38, 15220),
        LevelData(1060, 1360, 2570, 1060, 1, 9, 43, 17950),
        LevelData(1355, 1740, 3290, 1355, 1, 11, 47, 21130),
        LevelData(1735, 2230, 4210, 1735, 1, 13, 51, 24810),
        LevelData(2220, 2850, 5390, 2220, 1, 15, 56, 29080),
        LevelData(2840, 3650, 6895, 2840, 2, 18, 60, 34030),
        LevelData(3635, 4675, 8825, 3635, 2, 22, 65, 39770),
        LevelData(4650, 5980, 11300, 4650, 2, 27, 70, 46440),
        LevelData(5955, 7655, 14460, 5955, 2, 32, 75, 54170),
        LevelData(7620, 9800, 18510, 7620, 2, 38, 81, 63130),
    ],
    category: BuildingCategory::VillageStructure,
};

static EARTH_WALL: BuildingData = BuildingData {
    data: &[
        LevelData(120, 200, 0, 80, 0, 1, 2, 2000),
        LevelData(155, 255, 0, 100, 0, 1, 4, 2620),
        LevelData(195, 330, 0, 130, 0, 2, 6, 3340),
        LevelData(250, 420, 0, 170, 0, 2, 8, 4170),
        LevelData(320, 535, 0, 215, 0, 2, 10, 5140),
        LevelData(410, 685, 0, 275, 1, 3, 13, 6260),
        LevelData(530, 880, 0, 350, 1, 4, 15, 7570),
        LevelData(675, 1125, 0, 450, 1, 4, 17, 9080),
        LevelData(865, 1440, 0, 575, 1, 5, 20, 10830),
        LevelData(1105, 1845, 0, 740, 1, 6, 22, 12860),
        LevelData(1415, 2360, 0, 945, 1, 7, 24, 15220),
        LevelData(1815, 3020, 0, 1210, 1, 9, 27, 17950),
        LevelData(2320, 3870, 0, 1545, 1, 11, 29, 21130),
        LevelData(2970, 4950, 0, 1980, 1, 13, 32, 24810),
        LevelData(3805, 6340, 0, 2535, 1, 15, 35, 29080),
        LevelData(4870, 8115, 0, 3245, 2, 18, 37, 34030),
        LevelData(6230, 10385, 0, 4155, 2, 22, 40, 39770),
        LevelData(7975, 13290, 0, 5315, 2, 27, 43, 46440),
        LevelData(10210, 17015, 0, 6805, 2, 32, 46, 54170),
        LevelData(13065, 21780, 0, 8710, 2, 38, 49, 63130),
    ],
    category: BuildingCategory::VillageStructure,
};

static PALISADE: BuildingData = BuildingData {
    data: &[
        LevelData(160, 100, 80, 60, 0, 1, 2, 2000),
        LevelData(205, 130, 100, 75, 0, 1, 5, 2620),
        LevelData(260, 165, 130, 100, 0, 2, 8, 3340),
        LevelData(335, 210, 170, 125, 0, 2, 10, 4170),
        LevelData(430, 270, 215, 160, 0, 2, 13, 5140),
        LevelData(550, 345, 275, 205, 1, 3, 16, 6260),
        LevelData(705, 440, 350, 265, 1, 4, 19, 7570),
        LevelData(900, 565, 450, 340, 1, 4, 22, 9080),
        LevelData(1155, 720, 575, 430, 1, 5, 25, 10830),
        LevelData(1475, 920, 740, 555, 1, 6, 28, 12860),
        LevelData(1890, 1180, 945, 710, 1, 7, 31, 15220),
        LevelData(2420, 1510, 1210, 905, 1, 9, 34, 17950),
        LevelData(3095, 1935, 1545, 1160, 1, 11, 38, 21130),
        LevelData(3960, 2475, 1980, 1485, 1, 13, 41, 24810),
        LevelData(5070, 3170, 2535, 1900, 1, 15, 45, 29080),
        LevelData(6490, 4055, 3245, 2435, 2, 18, 48, 34030),
        LevelData(8310, 5190, 4155, 3115, 2, 22, 52, 39770),
        LevelData(10635, 6645, 5315, 3990, 2, 27, 56, 46440),
        LevelData(13610, 8505, 6805, 5105, 2, 32, 60, 54170),
        LevelData(17420, 10890, 8710, 6535, 2, 38, 64, 63130),
    ],
    category: BuildingCategory::VillageStructure,
};

static RALLY_POINT: BuildingData = BuildingData {
    data: &[
        LevelData(110, 160, 90, 70, 1, 1, 0, 670),
        LevelData(140, 205, 115, 90, 1, 1, 0, 780),
        LevelData(180, 260, 145, 115, 1, 1, 0, 900),
        LevelData(230, 335, 190, 145, 1, 2, 0, 1050),
        LevelData(295, 430, 240, 190, 1, 2, 0, 1210),
        LevelData(380, 550, 310, 240, 1, 2, 0, 1410),
        LevelData(485, 705, 395, 310, 1, 3, 0, 1630),
        LevelData(620, 900, 505, 395, 1, 4, 0, 1890),
        LevelData(795, 1155, 650, 505, 1, 4, 0, 2200),
        LevelData(1015, 1475, 830, 645, 1, 5, 0, 2550),
        LevelData(1300, 1890, 1065, 825, 1, 6, 0, 2960),
        LevelData(1660, 2420, 1360, 1060, 1, 7, 0, 3430),
        LevelData(2130, 3095, 1740, 1355, 1, 9, 0, 3980),
        LevelData(2725, 3960, 2230, 1735, 1, 11, 0, 4610),
        LevelData(3485, 5070, 2850, 2220, 1, 13, 0, 5350),
        LevelData(4460, 6490, 3650, 2840, 1, 15, 0, 6210),
        LevelData(5710, 8310, 4675, 3635, 1, 18, 0, 7200),
        LevelData(7310, 10635, 5980, 4650, 1, 22, 0, 8350),
        LevelData(9360, 13610, 7655, 5955, 1, 27, 0, 9690),
        LevelData(11980, 17420, 9800, 7620, 1, 32, 0, 11240),
    ],
    category: BuildingCategory::VillageStructure,
};

static MAKESHIFT_WALL: BuildingData = BuildingData {
    data: &[
        LevelData(50, 100, 20, 50, 0, 1, 1, 2000),
        LevelData(65, 130, 25, 65, 0, 1, 3, 2320),
        LevelData(80, 165, 35, 80, 0, 1, 5, 2690),
        LevelData(105, 210, 40, 105, 0, 2, 7, 3120),
        LevelData(135, 270, 55, 135, 0, 2, 9, 3620),
        LevelData(170, 345, 70, 170, 1, 2, 11, 4200),
        LevelData(220, 440, 90, 220, 1, 3, 13, 4870),
        LevelData(280, 565, 115, 280, 1, 4, 15, 5650),
        LevelData(360, 720, 145, 360, 1, 4, 17, 6560),
        LevelData(460, 920, 185, 460, 1, 5, 19, 7610),
        LevelData(590, 1180, 235, 590, 1, 6, 21, 8820),
        LevelData(755, 1510, 300, 755, 1, 7, 23, 10230),
        LevelData(965, 1935, 385, 965, 1, 9, 25, 11870),
        LevelData(1240, 2475, 495, 1240, 1, 11, 27, 13770),
        LevelData(1585, 3170, 635, 1585, 1, 13, 29, 15980),
        LevelData(2030, 4055, 810, 2030, 1, 15, 31, 18530),
        LevelData(2595, 5190, 1040, 2595, 1, 18, 33, 21500),
        LevelData(3325, 6645, 1330, 3325, 1, 22, 35, 24940),
        LevelData(4255, 8505, 1700, 4255, 1, 27, 37, 28930),
        LevelData(5445, 10890, 2180, 5445, 1, 32, 39, 33550),
    ],
    category: BuildingCategory::VillageStructure,
};

static STONE_WALL: BuildingData = BuildingData {
    data: &[
        LevelData(110, 160, 70, 60, 0, 1, 3, 2000),
        LevelData(140, 205, 90, 75, 0, 1, 6, 2320),
        LevelData(180, 260, 115, 100, 0, 1, 9, 2690),
        LevelData(230, 335, 145, 125, 0, 2, 13, 3120),
        LevelData(295, 430, 190, 160, 0, 2, 16, 3620),
        LevelData(380, 550, 240, 205, 1, 2, 19, 4200),
        LevelData(485, 705, 310, 265, 1, 3, 23, 4870),
        LevelData(620, 900, 395, 340, 1, 4, 27, 5650),
        LevelData(795, 1155, 505, 430, 1, 4, 31, 6560),
        LevelData(1015, 1475, 645, 555, 1, 5, 34, 7610),
        LevelData(1300, 1890, 825, 710, 1, 6, 38, 8820),
        LevelData(1660, 2420, 1060, 905, 1, 7, 42, 10230),
        LevelData(2130, 3095, 1355, 1160, 1, 9, 47, 11870),
        LevelData(2725, 3960, 1735, 1485, 1, 11, 51, 13770),
        LevelData(3485, 5070, 2220, 1900, 1, 13, 56, 15980),
        LevelData(4460, 6490, 2840, 2435, 1, 15, 60, 18530),
        LevelData(5710, 8310, 3635, 3115, 1, 18, 65, 21500),
        LevelData(7310, 10635, 4650, 3990, 1, 22, 70, 24940),
        LevelData(9360, 13610, 5955, 5105, 1, 27, 75, 28930),
        LevelData(11980, 17420, 7620, 6535, 1, 32, 81, 33550),
    ],
    category: BuildingCategory::VillageStructure,
};
