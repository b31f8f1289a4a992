// src/simulation/mod.rs

pub mod comparison;
pub mod convergence;
pub mod csv;
pub mod framework;
pub mod load_parameters;
pub mod table;

use crate::math::{Method, Trajectory};
use comparison::{summarize, ComparisonRow, ComparisonSummary};
use convergence::ConvergenceStudy;

/// 1つの積分法による実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub method: Method,
    pub trajectory: Trajectory,
    pub rows: Vec<ComparisonRow>, // 厳密解との比較
}

impl RunReport {
    pub fn summary(&self) -> Option<ComparisonSummary> {
        summarize(&self.rows)
    }
}

/// シナリオ全体の実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub runs: Vec<RunReport>,
    pub convergence: Vec<ConvergenceStudy>, // 収束調査（指定時のみ）
}
