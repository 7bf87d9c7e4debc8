//! Core types: roles, sensor records, and the in-memory monitoring state

pub mod constants;
mod role;
mod sensor;

pub use role::Role;
pub use sensor::{MonitorState, SensorReading, SensorStatus};
