// src/simulation/table.rs

use crate::simulation::comparison::ComparisonRow;

const RULE_WIDTH: usize = 62;

/// 比較結果を表形式の文字列にする
///
/// 列は Step, t_n, 近似解, 厳密解, 絶対誤差。
pub fn render_table(label: &str, rows: &[ComparisonRow]) -> String {
    let rule = format!("{}\n", "-".repeat(RULE_WIDTH));
    let mut table = String::new();

    table.push_str(&rule);
    table.push_str(&format!(
        "{:>7} | {:>8} | {:>15} | {:>10} | {:>10}\n",
        "Step",
        "t_n",
        format!("y_n ({label})"),
        "y_exact",
        "Error"
    ));
    table.push_str(&rule);
    for row in rows {
        table.push_str(&format_row(row));
        table.push('\n');
    }
    table.push_str(&rule);
    table
}

/// 1行分の書式
pub fn format_row(row: &ComparisonRow) -> String {
    format!(
        "{:7} | {:8.3} | {:15.6} | {:10.6} | {:10.6}",
        row.step, row.t, row.approx, row.exact, row.error
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let row = ComparisonRow {
            step: 1,
            t: 0.25,
            approx: 0.5,
            exact: 0.6065306597126334,
            error: 0.10653065971263342,
        };
        assert_eq!(
            format_row(&row),
            "      1 |    0.250 |        0.500000 |   0.606531 |   0.106531"
        );
    }

    #[test]
    fn test_render_table_layout() {
        let rows = [ComparisonRow {
            step: 0,
            t: 0.0,
            approx: 1.0,
            exact: 1.0,
            error: 0.0,
        }];
        let table = render_table("RK2", &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-".repeat(RULE_WIDTH));
        assert!(lines[1].contains("y_n (RK2)"));
        assert!(lines[1].trim_start().starts_with("Step"));
        assert_eq!(lines[3], "      0 |    0.000 |        1.000000 |   1.000000 |   0.000000");
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn test_render_table_has_one_line_per_row() {
        let row = ComparisonRow {
            step: 0,
            t: 0.0,
            approx: 1.0,
            exact: 1.0,
            error: 0.0,
        };
        let rows = [row, ComparisonRow { step: 1, ..row }, ComparisonRow { step: 2, ..row }];
        let table = render_table("Euler", &rows);
        assert_eq!(table.lines().count(), 7);
        assert!(table.ends_with('\n'));
        assert!(table.lines().nth(5).unwrap().starts_with("      2 |"));
    }
}
