// src/simulation/framework.rs

use crate::config::{InitialCondition, Scenario};
use crate::math::{integrate, IvpError, Method};
use crate::simulation::comparison::compare;
use crate::simulation::convergence::{convergence_study, ConvergenceStudy};
use crate::simulation::{RunReport, ScenarioReport};

/// 1つの積分法でシナリオを解き、厳密解と比較する
pub fn run_method(scenario: &Scenario, method: Method) -> Result<RunReport, IvpError> {
    scenario.problem.validate()?;
    let InitialCondition { t0, y0 } = scenario.initial;
    let problem = scenario.problem;

    let trajectory = integrate(
        &method,
        problem.rhs(),
        t0,
        y0,
        scenario.step,
        scenario.t_end,
    )?;
    let rows = compare(&trajectory, |t| problem.exact(t0, y0, t));

    Ok(RunReport {
        method,
        trajectory,
        rows,
    })
}

/// シナリオに指定された全積分法を実行する
///
/// どれか1つでも失敗した場合は途中の結果を捨ててエラーを返す。
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioReport, IvpError> {
    let runs = scenario
        .methods
        .iter()
        .map(|method| run_method(scenario, *method))
        .collect::<Result<Vec<_>, _>>()?;

    let convergence: Vec<ConvergenceStudy> = match scenario.convergence {
        Some(settings) => {
            let InitialCondition { t0, y0 } = scenario.initial;
            scenario
                .methods
                .iter()
                .map(|method| {
                    convergence_study(
                        *method,
                        &scenario.problem,
                        t0,
                        y0,
                        scenario.step,
                        scenario.t_end,
                        settings.halvings,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        None => Vec::new(),
    };

    Ok(ScenarioReport { runs, convergence })
}
