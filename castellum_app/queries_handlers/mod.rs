mod get_village_economy;

pub use get_village_economy::GetVillageEconomyHandler;
