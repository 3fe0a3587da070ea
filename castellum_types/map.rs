use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{common::ResourceKind, errors::GameError};

pub const RESOURCE_FIELDS_COUNT: u8 = 18;

/// How many of the 18 resource slots of a valley produce each resource
/// (wood, clay, iron, wheat).
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResourceFieldComposition(u8, u8, u8, u8);

impl ResourceFieldComposition {
    pub fn new(wood: u8, clay: u8, iron: u8, wheat: u8) -> Result<Self, GameError> {
        let total = wood as u16 + clay as u16 + iron as u16 + wheat as u16;
        if total != RESOURCE_FIELDS_COUNT as u16 {
            return Err(GameError::InvalidComposition(format!(
                "{wood}-{clay}-{iron}-{wheat} has {total} slots, expected {RESOURCE_FIELDS_COUNT}"
            )));
        }
        Ok(Self(wood, clay, iron, wheat))
    }

    pub fn wood(&self) -> u8 {
        self.0
    }
    pub fn clay(&self) -> u8 {
        self.1
    }
    pub fn iron(&self) -> u8 {
        self.2
    }
    pub fn wheat(&self) -> u8 {
        self.3
    }

    pub fn count(&self, kind: ResourceKind) -> u8 {
        match kind {
            ResourceKind::Wood => self.0,
            ResourceKind::Clay => self.1,
            ResourceKind::Iron => self.2,
            ResourceKind::Wheat => self.3,
        }
    }

    /// Resource type of a resource slot (1..=18). Wood slots come first,
    /// followed by clay, iron and wheat.
    pub fn resource_at(&self, slot_id: u8) -> Option<ResourceKind> {
        if slot_id == 0 || slot_id > RESOURCE_FIELDS_COUNT {
            return None;
        }

        let mut upper = 0;
        for kind in ResourceKind::ALL {
            upper += self.count(kind);
            if slot_id <= upper {
                return Some(kind);
            }
        }
        None
    }

    /// Iterates `(slot_id, kind)` for every resource slot.
    pub fn slots(&self) -> impl Iterator<Item = (u8, ResourceKind)> + '_ {
        (1..=RESOURCE_FIELDS_COUNT)
            .filter_map(move |slot_id| Some((slot_id, self.resource_at(slot_id)?)))
    }
}

impl Default for ResourceFieldComposition {
    fn default() -> Self {
        Self(4, 4, 4, 6)
    }
}

impl FromStr for ResourceFieldComposition {
    type Err = GameError;

    /// Parses compact notations like `4446`, `11115` or `00018`:
    /// one digit each for wood, clay and iron, the rest is wheat.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidComposition(s.to_string());

        if s.len() < 4 || s.len() > 5 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let digit = |idx: usize| s[idx..idx + 1].parse::<u8>().map_err(|_| invalid());
        let wheat = s[3..].parse::<u8>().map_err(|_| invalid())?;

        Self::new(digit(0)?, digit(1)?, digit(2)?, wheat)
    }
}

impl fmt::Display for ResourceFieldComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.0, self.1, self.2, self.3)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn to_id(&self, world_size: i32) -> u32 {
        ((world_size - self.y) * (world_size * 2 + 1) + (world_size + self.x + 1)) as u32
    }

    /// Returns the distance between two points.
    pub fn distance(&self, position: &Position, world_size: i32) -> u32 {
        let mut x_diff = (self.x - position.x).abs();
        let mut y_diff = (self.y - position.y).abs();

        if x_diff > world_size {
            x_diff = (2 * world_size + 1) - x_diff;
        }

        if y_diff > world_size {
            y_diff = (2 * world_size + 1) - y_diff;
        }

        (((x_diff * x_diff) + (y_diff * y_diff)) as f64).sqrt() as u32
    }
}

/// Settlement size class of an NPC village.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum VillageSize {
    #[serde(rename = "xxs")]
    Xxs,
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    X2l,
    #[serde(rename = "3xl")]
    X3l,
    #[serde(rename = "4xl")]
    X4l,
}

impl fmt::Display for VillageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VillageSize::Xxs => "xxs",
            VillageSize::Xs => "xs",
            VillageSize::Sm => "sm",
            VillageSize::Md => "md",
            VillageSize::Lg => "lg",
            VillageSize::Xl => "xl",
            VillageSize::X2l => "2xl",
            VillageSize::X3l => "3xl",
            VillageSize::X4l => "4xl",
        };
        f.write_str(name)
    }
}
