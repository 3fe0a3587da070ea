pub mod ticker;
pub mod worker;
