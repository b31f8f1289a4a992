// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use ivp_fixed_step::simulation::convergence::ConvergenceStudy;
use ivp_fixed_step::simulation::csv::write_comparison_csv;
use ivp_fixed_step::simulation::framework::run_scenario;
use ivp_fixed_step::simulation::load_parameters::load_scenario;
use ivp_fixed_step::simulation::table::render_table;

const DEFAULT_SCENARIO: &str = "config/scenario.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    // シナリオの読み込み（引数がなければ既定のファイル）
    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SCENARIO.to_string());
    let scenario = load_scenario(&path)?;

    // 全積分法の実行。失敗した場合は何も出力しない
    let report = match run_scenario(&scenario) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("積分に失敗しました: {err}");
            return Err(err.into());
        }
    };

    println!(
        "{} (t0 = {}, y0 = {}, h = {}, t_end = {})",
        scenario.problem.equation(),
        scenario.initial.t0,
        scenario.initial.y0,
        scenario.step,
        scenario.t_end
    );

    for run in &report.runs {
        println!();
        print!("{}", render_table(&run.method.to_string(), &run.rows));
        if let Some(summary) = run.summary() {
            println!(
                "{}: 最大誤差 = {:.6e}, 終端誤差 = {:.6e}",
                run.method, summary.max_error, summary.final_error
            );
        }

        // CSV出力の設定
        if let Some(output) = &scenario.output {
            let written = write_comparison_csv(Path::new(&output.csv_dir), run.method, &run.rows)?;
            println!("{} に書き込みました", written.display());
        }
    }

    for study in &report.convergence {
        print_convergence(study);
    }

    Ok(())
}

/// 収束調査結果の表示
fn print_convergence(study: &ConvergenceStudy) {
    println!();
    println!("収束調査: {}", study.method);
    println!("{:>12} | {:>14} | {:>8} | {:>6}", "h", "error", "ratio", "order");
    for entry in &study.entries {
        let ratio = entry
            .ratio
            .map(|r| format!("{r:8.3}"))
            .unwrap_or_else(|| format!("{:>8}", "-"));
        let order = entry
            .observed_order
            .map(|p| format!("{p:6.3}"))
            .unwrap_or_else(|| format!("{:>6}", "-"));
        println!("{:12.6} | {:14.6e} | {} | {}", entry.h, entry.error, ratio, order);
    }
}
