// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::{ConvergenceSettings, InitialCondition, OutputSettings};
use crate::math::Method;
use crate::models::Problem;

/// 1回の実行を記述するシナリオ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    pub problem: Problem,
    pub initial: InitialCondition,
    pub step: f64,
    pub t_end: f64,
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub output: Option<OutputSettings>,
    #[serde(default)]
    pub convergence: Option<ConvergenceSettings>,
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scenario() {
        let yaml = r#"
problem:
  kind: exponential_decay
  rate: 2.0
initial: { t0: 0.0, y0: 1.0 }
step: 0.25
t_end: 3.0
methods: [rk2]
output:
  csv_dir: output
convergence:
  halvings: 3
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.problem, Problem::ExponentialDecay { rate: 2.0 });
        assert_eq!(scenario.initial, InitialCondition { t0: 0.0, y0: 1.0 });
        assert_eq!(scenario.step, 0.25);
        assert_eq!(scenario.t_end, 3.0);
        assert_eq!(scenario.methods, vec![Method::Rk2]);
        assert_eq!(scenario.output.unwrap().csv_dir, "output");
        assert_eq!(scenario.convergence.unwrap().halvings, 3);
    }

    #[test]
    fn test_optional_sections_default() {
        let yaml = r#"
problem: { kind: logistic, rate: 1.0, capacity: 4.0 }
initial: { t0: 0.0, y0: 0.5 }
step: 0.1
t_end: 1.0
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.methods, vec![Method::Euler, Method::Rk2]);
        assert!(scenario.output.is_none());
        assert!(scenario.convergence.is_none());
    }

    #[test]
    fn test_missing_step_is_an_error() {
        let yaml = r#"
problem: { kind: exponential_decay, rate: 2.0 }
initial: { t0: 0.0, y0: 1.0 }
t_end: 1.0
"#;
        assert!(serde_yaml::from_str::<Scenario>(yaml).is_err());
    }
}
