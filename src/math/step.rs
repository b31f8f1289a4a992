// src/math/step.rs

use std::error::Error as StdError;
use std::fmt;

use serde::Deserialize;

use crate::math::error::IvpError;

/// 右辺関数 f(t, y) を1回評価する
///
/// 呼び出し側のエラーと有限でない戻り値は、評価点 (t, y) 付きの
/// `IvpError` に変換する。
pub(crate) fn evaluate<F, E>(f: &mut F, t: f64, y: f64) -> Result<f64, IvpError>
where
    F: FnMut(f64, f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    match f(t, y) {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(IvpError::NonFiniteDerivative { t, y, value }),
        Err(source) => Err(IvpError::DerivativeEvaluation {
            t,
            y,
            source: Box::new(source),
        }),
    }
}

/// 1ステップ分の積分則
///
/// 内部状態を持たず、同じ入力に対して常に同じ y_next を返す。
pub trait StepFunction {
    /// (t, y) から刻み幅 h だけ進めた y_next を返す
    fn step<F, E>(&self, f: &mut F, t: f64, y: f64, h: f64) -> Result<f64, IvpError>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static;

    /// 大域誤差の次数
    fn order(&self) -> u32;

    /// 1ステップあたりの f の評価回数
    fn evaluations_per_step(&self) -> usize;
}

/// 前進 Euler 法
///
/// y_next = y + h * f(t, y)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl StepFunction for Euler {
    fn step<F, E>(&self, f: &mut F, t: f64, y: f64, h: f64) -> Result<f64, IvpError>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static,
    {
        let slope = evaluate(f, t, y)?;
        Ok(y + h * slope)
    }

    fn order(&self) -> u32 {
        1
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }
}

/// 2次の Runge-Kutta 法（Heun 法、陽的台形則）
///
/// 区間の始点の傾き k1 と、Euler 法で予測した終点の傾き k2 を平均する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk2;

impl StepFunction for Rk2 {
    fn step<F, E>(&self, f: &mut F, t: f64, y: f64, h: f64) -> Result<f64, IvpError>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static,
    {
        let k1 = evaluate(f, t, y)?;
        let k2 = evaluate(f, t + h, y + h * k1)?;
        Ok(y + (h / 2.0) * (k1 + k2))
    }

    fn order(&self) -> u32 {
        2
    }

    fn evaluations_per_step(&self) -> usize {
        2
    }
}

/// 呼び出し側が選択する積分法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Euler,
    Rk2,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Euler, Method::Rk2];

    /// 設定ファイルや出力ファイル名で使う識別子
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Rk2 => "rk2",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Euler => write!(f, "Euler"),
            Method::Rk2 => write!(f, "RK2"),
        }
    }
}

impl StepFunction for Method {
    fn step<F, E>(&self, f: &mut F, t: f64, y: f64, h: f64) -> Result<f64, IvpError>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static,
    {
        match self {
            Method::Euler => Euler.step(f, t, y, h),
            Method::Rk2 => Rk2.step(f, t, y, h),
        }
    }

    fn order(&self) -> u32 {
        match self {
            Method::Euler => Euler.order(),
            Method::Rk2 => Rk2.order(),
        }
    }

    fn evaluations_per_step(&self) -> usize {
        match self {
            Method::Euler => Euler.evaluations_per_step(),
            Method::Rk2 => Rk2.evaluations_per_step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::fmt;

    #[derive(Debug)]
    struct OutOfDomain;

    impl fmt::Display for OutOfDomain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "out of domain")
        }
    }

    impl StdError for OutOfDomain {}

    fn decay(_t: f64, y: f64) -> Result<f64, Infallible> {
        Ok(-2.0 * y)
    }

    /// y_next = 1 + 0.25 * (-2 * 1) = 0.5
    #[test]
    fn test_euler_single_step() {
        let y_next = Euler.step(&mut decay, 0.0, 1.0, 0.25).unwrap();
        assert_eq!(y_next, 0.5);
    }

    /// k1 = -2, k2 = f(0.25, 0.5) = -1, y_next = 1 + 0.125 * (-3) = 0.625
    #[test]
    fn test_rk2_single_step() {
        let y_next = Rk2.step(&mut decay, 0.0, 1.0, 0.25).unwrap();
        assert_eq!(y_next, 0.625);
    }

    /// Euler は始点のみ、RK2 は始点と予測終点で f を評価する
    #[test]
    fn test_evaluation_points() {
        let mut calls = Vec::new();
        let mut f = |t: f64, y: f64| -> Result<f64, Infallible> {
            calls.push((t, y));
            Ok(t + y)
        };
        Euler.step(&mut f, 1.0, 2.0, 0.5).unwrap();
        assert_eq!(calls, vec![(1.0, 2.0)]);

        calls.clear();
        let mut f = |t: f64, y: f64| -> Result<f64, Infallible> {
            calls.push((t, y));
            Ok(t + y)
        };
        // k1 = 3, 予測点 = (1.5, 2 + 0.5 * 3)
        Rk2.step(&mut f, 1.0, 2.0, 0.5).unwrap();
        assert_eq!(calls, vec![(1.0, 2.0), (1.5, 3.5)]);
    }

    #[test]
    fn test_evaluations_per_step_matches_calls() {
        for method in Method::ALL {
            let mut count = 0;
            let mut f = |_t: f64, y: f64| -> Result<f64, Infallible> {
                count += 1;
                Ok(y)
            };
            method.step(&mut f, 0.0, 1.0, 0.1).unwrap();
            assert_eq!(count, method.evaluations_per_step());
        }
    }

    #[test]
    fn test_method_dispatch_matches_variants() {
        let euler = Method::Euler.step(&mut decay, 0.3, 0.7, 0.1).unwrap();
        let rk2 = Method::Rk2.step(&mut decay, 0.3, 0.7, 0.1).unwrap();
        assert_eq!(euler, Euler.step(&mut decay, 0.3, 0.7, 0.1).unwrap());
        assert_eq!(rk2, Rk2.step(&mut decay, 0.3, 0.7, 0.1).unwrap());
        assert_eq!(Method::Euler.order(), 1);
        assert_eq!(Method::Rk2.order(), 2);
    }

    /// RK2 の2回目の評価で失敗した場合、予測点の座標が報告される
    #[test]
    fn test_rk2_reports_predicted_point_on_failure() {
        let mut f = |t: f64, y: f64| -> Result<f64, OutOfDomain> {
            if t > 0.0 {
                Err(OutOfDomain)
            } else {
                Ok(-2.0 * y)
            }
        };
        let err = Rk2.step(&mut f, 0.0, 1.0, 0.25).unwrap_err();
        assert!(matches!(err, IvpError::DerivativeEvaluation { .. }));
        assert_eq!(err.sample(), Some((0.25, 0.5)));
    }

    #[test]
    fn test_non_finite_derivative_is_rejected() {
        let mut f = |_t: f64, y: f64| -> Result<f64, Infallible> { Ok(1.0 / y) };
        let err = Euler.step(&mut f, 0.0, 0.0, 0.1).unwrap_err();
        match err {
            IvpError::NonFiniteDerivative { t, y, value } => {
                assert_eq!((t, y), (0.0, 0.0));
                assert!(value.is_infinite());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_method_deserializes_from_lowercase() {
        let methods: Vec<Method> = serde_yaml::from_str("[euler, rk2]").unwrap();
        assert_eq!(methods, vec![Method::Euler, Method::Rk2]);
        assert!(serde_yaml::from_str::<Method>("rk4").is_err());
        assert_eq!(Method::Rk2.to_string(), "RK2");
        assert_eq!(Method::Rk2.as_str(), "rk2");
    }
}
