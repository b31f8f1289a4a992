// src/simulation/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::math::Method;
use crate::simulation::comparison::ComparisonRow;

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(b"step,t,y_approx,y_exact,abs_error\n")
}

/// CSV行の作成
pub fn create_csv_row(row: &ComparisonRow) -> String {
    format!(
        "{},{},{},{},{}\n",
        row.step, row.t, row.approx, row.exact, row.error
    )
}

/// 比較結果を任意の出力先へ書き込む
pub fn write_rows<W: Write>(writer: &mut W, rows: &[ComparisonRow]) -> Result<(), std::io::Error> {
    write_csv_header(writer)?;
    for row in rows {
        writer.write_all(create_csv_row(row).as_bytes())?;
    }
    writer.flush()
}

/// `<dir>/<method>.csv` に比較結果を書き出す
///
/// # 戻り値
/// - 書き込んだファイルのパス
pub fn write_comparison_csv(
    dir: &Path,
    method: Method,
    rows: &[ComparisonRow],
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.csv", method.as_str()));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_rows(&mut writer, rows)?;
    Ok(path)
}
