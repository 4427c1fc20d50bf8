pub mod constants;
pub mod generator;
pub mod reference;
pub mod slot_id;
pub mod zone;

pub use generator::Scheduler;
