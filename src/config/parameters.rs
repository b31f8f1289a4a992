// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct InitialCondition {
    pub t0: f64, // 初期時刻
    pub y0: f64, // 初期値
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputSettings {
    pub csv_dir: String, // CSV出力先ディレクトリ
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ConvergenceSettings {
    pub halvings: u32, // 刻み幅を半分にする回数
}
