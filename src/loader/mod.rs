//! スプレッドシート読み込みモジュール
//!
//! calamine で全シートをシート順に読み込み、共通ライブラリの Workbook に変換する。
//! 各シートの先頭行をヘッダーとし、セルは保存形式の型のまま変換する。

pub mod cache;

pub use cache::WorkbookCache;

use crate::error::{DashError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use forensic_dash_common::{Cell, Table, Workbook};
use std::path::Path;

/// ブックを読み込む
///
/// ファイルがない、読めない、スプレッドシートとして解釈できない場合は
/// 読み込みエラー（セッション継続不可）。
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    if !path.is_file() {
        return Err(DashError::FileNotFound(path.display().to_string()));
    }

    let load_error = |reason: String| DashError::Load {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| load_error(e.to_string()))?;

    let mut tables = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| load_error(format!("シート '{}': {}", name, e)))?;
        let table = range_to_table(&name, &range);
        tracing::debug!(sheet = %name, rows = table.len(), columns = table.headers().len(), "シート読み込み");
        tables.push(table);
    }

    tracing::info!(path = %path.display(), sheets = tables.len(), "ブック読み込み完了");
    Ok(Workbook::new(tables))
}

/// calamine のセルを共通のセル型へ
pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// 範囲を表に変換（先頭行 = ヘッダー）
///
/// calamine の範囲は最初の非空セルから始まるため、左側の空列を補って
/// 列番号をシート上の位置（A列 = 0）に揃える。
fn range_to_table(name: &str, range: &Range<Data>) -> Table {
    let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(col_offset)
            .chain(row.iter().map(convert_cell))
            .collect::<Vec<Cell>>()
    });

    let headers = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|c| if c.is_empty() { String::new() } else { c.to_string() })
                .collect()
        })
        .unwrap_or_default();

    Table::new(name, headers, rows.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Int(2014)), Cell::Number(2014.0));
        assert_eq!(convert_cell(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(convert_cell(&Data::String("Acme".into())), Cell::Text("Acme".into()));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Bool(true));
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_workbook(Path::new("/nonexistent/financials.xlsx"));
        assert!(matches!(result, Err(DashError::FileNotFound(_))));
    }

    #[test]
    fn test_load_not_a_spreadsheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a zip container").unwrap();

        let result = load_workbook(&path);
        assert!(matches!(result, Err(DashError::Load { .. })));
    }
}
