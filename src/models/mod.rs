pub mod appointment;
pub mod patient;
pub mod provider;
pub mod slot;
