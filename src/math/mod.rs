// src/math/mod.rs

pub mod error;
pub mod integrator;
pub mod step;

pub use error::IvpError;
pub use integrator::{integrate, Integrator, State, Steps, Trajectory};
pub use step::{Euler, Method, Rk2, StepFunction};
