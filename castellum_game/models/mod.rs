pub mod accrual;
pub mod buildings;
pub mod construction;
pub mod factory;
pub mod map;
pub mod player;
pub mod population;
pub mod presets;
pub mod production;
pub mod village;
