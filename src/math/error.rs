// src/math/error.rs

use std::error::Error as StdError;

use thiserror::Error;

/// 右辺関数が返すエラーの型消去版
pub type BoxedSourceError = Box<dyn StdError + Send + Sync + 'static>;

/// 初期値問題の数値積分で発生するエラー
#[derive(Error, Debug)]
pub enum IvpError {
    /// 刻み幅や時間範囲などのパラメータが不正
    #[error("パラメータ `{name}` = {value} が不正です: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 右辺関数 f(t, y) の評価に失敗
    #[error("f(t = {t}, y = {y}) の評価に失敗しました: {source}")]
    DerivativeEvaluation {
        t: f64,
        y: f64,
        #[source]
        source: BoxedSourceError,
    },

    /// 右辺関数が NaN または無限大を返した
    #[error("f(t = {t}, y = {y}) が有限でない値 {value} を返しました")]
    NonFiniteDerivative { t: f64, y: f64, value: f64 },
}

impl IvpError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        IvpError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// エラーが発生したサンプル点 (t, y)。パラメータエラーの場合は None
    pub fn sample(&self) -> Option<(f64, f64)> {
        match self {
            IvpError::InvalidParameter { .. } => None,
            IvpError::DerivativeEvaluation { t, y, .. } => Some((*t, *y)),
            IvpError::NonFiniteDerivative { t, y, .. } => Some((*t, *y)),
        }
    }
}
