// src/math/integrator.rs

use std::error::Error as StdError;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Index;

use crate::math::error::IvpError;
use crate::math::step::StepFunction;

/// 時刻 t における従属変数 y のサンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub t: f64,
    pub y: f64,
}

/// 等間隔の時間格子上の解の列
///
/// 添字 0..=n_steps、t は単調増加で間隔は h。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn first(&self) -> Option<&State> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.t).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.y).collect()
    }

    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl FromIterator<State> for Trajectory {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Trajectory {
            states: iter.into_iter().collect(),
        }
    }
}

/// 固定刻み積分の設定
///
/// 生成時にパラメータを検証し、ステップ数を一度だけ計算する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    t0: f64,
    y0: f64,
    h: f64,
    n_steps: usize,
}

impl Integrator {
    /// # 引数
    /// - `t0`, `y0`: 初期条件
    /// - `h`: 刻み幅（正の有限値）
    /// - `t_end`: 終了時刻（`t0` 以上）
    ///
    /// # 戻り値
    /// - 検証済みの積分器。ステップ数は floor((t_end - t0) / h) で、端数は切り捨てる
    pub fn new(t0: f64, y0: f64, h: f64, t_end: f64) -> Result<Self, IvpError> {
        if !t0.is_finite() {
            return Err(IvpError::invalid("t0", t0, "有限値でなければなりません"));
        }
        if !y0.is_finite() {
            return Err(IvpError::invalid("y0", y0, "有限値でなければなりません"));
        }
        if !t_end.is_finite() {
            return Err(IvpError::invalid("t_end", t_end, "有限値でなければなりません"));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(IvpError::invalid("h", h, "刻み幅は正の有限値でなければなりません"));
        }
        if t_end < t0 {
            return Err(IvpError::invalid("t_end", t_end, "t0 より前の時刻は指定できません"));
        }

        let ratio = ((t_end - t0) / h).floor();
        if ratio >= usize::MAX as f64 {
            return Err(IvpError::invalid("h", h, "ステップ数が大きすぎます"));
        }

        Ok(Integrator {
            t0,
            y0,
            h,
            n_steps: ratio as usize,
        })
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// 解を1点ずつ遅延生成するイテレータを返す
    pub fn steps<'a, S, F, E>(&self, step_fn: &'a S, f: F) -> Steps<'a, S, F, E>
    where
        S: StepFunction,
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static,
    {
        Steps {
            step_fn,
            f,
            h: self.h,
            current: State {
                t: self.t0,
                y: self.y0,
            },
            remaining: self.n_steps,
            started: false,
            finished: false,
            _error: PhantomData,
        }
    }

    /// 全ステップを計算して解の列を返す
    ///
    /// f の評価に失敗した時点で中断し、途中までの結果は返さない。
    pub fn run<S, F, E>(&self, step_fn: &S, f: F) -> Result<Trajectory, IvpError>
    where
        S: StepFunction,
        F: FnMut(f64, f64) -> Result<f64, E>,
        E: StdError + Send + Sync + 'static,
    {
        // n_steps は入力次第で非常に大きくなるので事前確保しない
        let states = self.steps(step_fn, f).collect::<Result<Vec<_>, _>>()?;
        Ok(Trajectory { states })
    }
}

/// 固定刻みで初期値問題を解く
///
/// # 引数
/// - `step_fn`: 1ステップの積分則（`Euler`, `Rk2`, `Method`）
/// - `f`: 右辺関数 f(t, y)
/// - `t0`, `y0`, `h`, `t_end`: 初期条件、刻み幅、終了時刻
///
/// # 戻り値
/// - n_steps + 1 点の解の列
pub fn integrate<S, F, E>(
    step_fn: &S,
    f: F,
    t0: f64,
    y0: f64,
    h: f64,
    t_end: f64,
) -> Result<Trajectory, IvpError>
where
    S: StepFunction,
    F: FnMut(f64, f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    Integrator::new(t0, y0, h, t_end)?.run(step_fn, f)
}

/// 解を1点ずつ生成するイテレータ
///
/// 最初に初期条件を返し、以降は要求されるたびに1ステップ進める。
/// エラーを返した後は何も返さない。
pub struct Steps<'a, S, F, E> {
    step_fn: &'a S,
    f: F,
    h: f64,
    current: State,
    remaining: usize,
    started: bool,
    finished: bool,
    _error: PhantomData<fn() -> E>,
}

impl<'a, S, F, E> Iterator for Steps<'a, S, F, E>
where
    S: StepFunction,
    F: FnMut(f64, f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Item = Result<State, IvpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(self.current));
        }
        if self.remaining == 0 {
            self.finished = true;
            return None;
        }

        let State { t, y } = self.current;
        match self.step_fn.step(&mut self.f, t, y, self.h) {
            Ok(y_next) => {
                // 時刻は h の逐次加算で進める
                self.current = State {
                    t: t + self.h,
                    y: y_next,
                };
                self.remaining -= 1;
                Some(Ok(self.current))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let pending = self.remaining.saturating_add(usize::from(!self.started));
        // 失敗すると早く終わるので下限は 0 または 1
        (usize::from(!self.started), Some(pending))
    }
}

impl<'a, S, F, E> FusedIterator for Steps<'a, S, F, E>
where
    S: StepFunction,
    F: FnMut(f64, f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
}
