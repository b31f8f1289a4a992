// src/models/mod.rs

pub mod problem;

pub use problem::{pure, Problem};
