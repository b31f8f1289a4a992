// src/simulation/comparison.rs

use crate::math::Trajectory;

/// 近似解と厳密解の比較結果（1格子点分）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub step: usize,
    pub t: f64,
    pub approx: f64,
    pub exact: f64,
    pub error: f64,
}

/// 比較結果の集計
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSummary {
    pub max_error: f64,
    pub final_error: f64,
}

/// 解の列と厳密解を添字ごとに突き合わせる
///
/// # 引数
/// - `trajectory`: 数値解
/// - `y_exact`: 厳密解 y(t)
///
/// # 戻り値
/// - 各格子点の比較結果。誤差は |y_exact(t_i) - y_i|
pub fn compare<G>(trajectory: &Trajectory, mut y_exact: G) -> Vec<ComparisonRow>
where
    G: FnMut(f64) -> f64,
{
    trajectory
        .iter()
        .enumerate()
        .map(|(step, state)| {
            let exact = y_exact(state.t);
            ComparisonRow {
                step,
                t: state.t,
                approx: state.y,
                exact,
                error: (exact - state.y).abs(),
            }
        })
        .collect()
}

/// 最大誤差と終端での誤差。行がなければ None
pub fn summarize(rows: &[ComparisonRow]) -> Option<ComparisonSummary> {
    let last = rows.last()?;
    let max_error = rows.iter().map(|row| row.error).fold(0.0, f64::max);
    Some(ComparisonSummary {
        max_error,
        final_error: last.error,
    })
}
