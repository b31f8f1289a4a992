// src/lib.rs

//! 1階常微分方程式 dy/dt = f(t, y) の固定刻み初期値問題ソルバ
//!
//! 積分則は前進 Euler 法と2次 Runge-Kutta 法（Heun 法）。
//!
//! ```
//! use ivp_fixed_step::math::{integrate, Method};
//! use ivp_fixed_step::models::pure;
//!
//! let trajectory = integrate(&Method::Rk2, pure(|_t, y| -2.0 * y), 0.0, 1.0, 0.25, 3.0).unwrap();
//! assert_eq!(trajectory.len(), 13);
//! assert_eq!(trajectory[1].y, 0.625);
//! ```

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;
