// src/models/problem.rs

use std::convert::Infallible;

use serde::Deserialize;

use crate::math::error::IvpError;

/// 失敗しない右辺関数 f(t, y) -> f64 を積分器が受け取る形に変換する
pub fn pure<F>(mut f: F) -> impl FnMut(f64, f64) -> Result<f64, Infallible>
where
    F: FnMut(f64, f64) -> f64,
{
    move |t, y| Ok(f(t, y))
}

/// 厳密解が既知の組み込み初期値問題
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// dy/dt = -rate * y
    ExponentialDecay { rate: f64 },
    /// dy/dt = rate * y * (1 - y / capacity)
    Logistic { rate: f64, capacity: f64 },
}

impl Problem {
    /// 係数の検証
    pub fn validate(&self) -> Result<(), IvpError> {
        match *self {
            Problem::ExponentialDecay { rate } => {
                if !rate.is_finite() {
                    return Err(IvpError::invalid("rate", rate, "有限値でなければなりません"));
                }
            }
            Problem::Logistic { rate, capacity } => {
                if !rate.is_finite() {
                    return Err(IvpError::invalid("rate", rate, "有限値でなければなりません"));
                }
                if !capacity.is_finite() || capacity == 0.0 {
                    return Err(IvpError::invalid(
                        "capacity",
                        capacity,
                        "0 以外の有限値でなければなりません",
                    ));
                }
            }
        }
        Ok(())
    }

    /// 右辺 f(t, y)
    pub fn derivative(&self, _t: f64, y: f64) -> f64 {
        match *self {
            Problem::ExponentialDecay { rate } => -rate * y,
            Problem::Logistic { rate, capacity } => rate * y * (1.0 - y / capacity),
        }
    }

    /// 積分器に渡す右辺関数
    pub fn rhs(&self) -> impl FnMut(f64, f64) -> Result<f64, Infallible> {
        let problem = *self;
        pure(move |t, y| problem.derivative(t, y))
    }

    /// 初期条件 (t0, y0) に対する時刻 t の厳密解
    pub fn exact(&self, t0: f64, y0: f64, t: f64) -> f64 {
        let elapsed = t - t0;
        match *self {
            Problem::ExponentialDecay { rate } => y0 * (-rate * elapsed).exp(),
            Problem::Logistic { rate, capacity } => {
                if y0 == 0.0 {
                    return 0.0;
                }
                capacity / (1.0 + (capacity / y0 - 1.0) * (-rate * elapsed).exp())
            }
        }
    }

    /// 表のタイトル用の式
    pub fn equation(&self) -> String {
        match *self {
            Problem::ExponentialDecay { rate } => format!("dy/dt = -{rate}y"),
            Problem::Logistic { rate, capacity } => {
                format!("dy/dt = {rate}y(1 - y/{capacity})")
            }
        }
    }
}
