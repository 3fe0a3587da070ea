mod construction_event_repository;
pub mod memory;
mod village_repository;

pub use construction_event_repository::{ConstructionEventRepository, ConstructionRecord};
pub use village_repository::VillageRepository;
