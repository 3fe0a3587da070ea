use thiserror::Error;
use uuid::Uuid;

use crate::{buildings::BuildingName, tribe::Tribe};

/// Errors for domain logic (game rules).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Building {0:?} is not in the catalog")]
    UnknownBuilding(BuildingName),

    #[error("{level} is out of range for {building:?} (max level {max_level})")]
    LevelOutOfRange {
        building: BuildingName,
        level: u8,
        max_level: u8,
    },

    #[error("No building field on slot {slot_id}")]
    UnknownField { slot_id: u8 },

    #[error("Building {building:?} on slot {slot_id} has already reached max level")]
    AlreadyMaxLevel { building: BuildingName, slot_id: u8 },

    #[error("Invalid placement on slot {slot_id}: {reason}")]
    InvalidPlacement { slot_id: u8, reason: String },

    #[error("Invalid resource field composition: {0}")]
    InvalidComposition(String),

    #[error("Not enough resources")]
    NotEnoughResources,

    #[error("Tribe {0:?} can't own villages")]
    NonPlayableTribe(Tribe),

    #[error("Slot {slot_id} is at level {current}, can't upgrade to level {requested}")]
    UnexpectedUpgradeLevel {
        slot_id: u8,
        current: u8,
        requested: u8,
    },

    #[error("Tile {tile_id} is owned by unknown player {player_id}")]
    UnknownOwner { tile_id: u32, player_id: Uuid },

    #[error("Accrual clock deadline overflowed")]
    ClockOverflow,
}
