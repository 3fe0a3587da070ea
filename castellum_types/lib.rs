pub mod buildings;
pub mod common;
pub mod errors;
pub mod map;
pub mod tribe;

pub use errors::Result;
