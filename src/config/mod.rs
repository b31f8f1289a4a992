// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{ConvergenceSettings, InitialCondition, OutputSettings};
pub use scenario::Scenario;
