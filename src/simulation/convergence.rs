// src/simulation/convergence.rs

use crate::math::{integrate, Integrator, IvpError, Method};
use crate::models::Problem;

/// 刻み幅1つ分の収束調査結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceEntry {
    pub h: f64,
    pub t_final: f64,
    pub error: f64,
    /// 1つ前（刻み幅が2倍）の誤差との比
    pub ratio: Option<f64>,
    /// log2(ratio)
    pub observed_order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    pub method: Method,
    pub entries: Vec<ConvergenceEntry>,
}

impl ConvergenceStudy {
    /// 最も細かい刻み幅で観測された次数
    pub fn finest_order(&self) -> Option<f64> {
        self.entries.last().and_then(|entry| entry.observed_order)
    }
}

/// 刻み幅を h, h/2, ..., h/2^halvings と変えて終端誤差を比べる
///
/// 誤差は最も粗い格子の最終点の時刻で |y_exact(t) - y| として測る。
/// t_end - t0 が h で割り切れない場合も、比較する時刻はずれない。
pub fn convergence_study(
    method: Method,
    problem: &Problem,
    t0: f64,
    y0: f64,
    h: f64,
    t_end: f64,
    halvings: u32,
) -> Result<ConvergenceStudy, IvpError> {
    if halvings == 0 {
        return Err(IvpError::invalid(
            "halvings",
            0.0,
            "1 回以上の半減が必要です",
        ));
    }
    problem.validate()?;

    // 最も粗い格子の最終点は細かい格子上にも必ずあるので、全て同じ時刻で比べる
    let coarse_steps = Integrator::new(t0, y0, h, t_end)?.n_steps();

    let mut entries: Vec<ConvergenceEntry> = Vec::with_capacity(halvings as usize + 1);
    let mut step = h;
    for k in 0..=halvings {
        let trajectory = integrate(&method, problem.rhs(), t0, y0, step, t_end)?;
        let index = coarse_steps.saturating_mul(2usize.saturating_pow(k));
        let (t_final, error) = match trajectory.states().get(index) {
            Some(state) => (state.t, (problem.exact(t0, y0, state.t) - state.y).abs()),
            None => {
                return Err(IvpError::invalid(
                    "h",
                    step,
                    "細かい格子に比較時刻が含まれません",
                ))
            }
        };

        let ratio = entries
            .last()
            .filter(|_| error > 0.0)
            .map(|previous| previous.error / error);
        let observed_order = ratio.filter(|r| *r > 0.0).map(f64::log2);

        entries.push(ConvergenceEntry {
            h: step,
            t_final,
            error,
            ratio,
            observed_order,
        });
        step /= 2.0;
    }

    Ok(ConvergenceStudy { method, entries })
}
