//! 指標系列の抽出
//!
//! 2通りのシート形式から (年度, 値) の系列を取り出す:
//! - 構造化形式: Company / Year 列 + 指標ごとの列（1行 = 1社1年度）
//! - ラベル形式: 先頭列が指標ラベル、残りの列が年度（1行 = 1指標）
//!
//! 見つからない指標はエラーではなく空の系列になる。
//! 数値として読めないセルは欠損値として残し、年度軸の位置は崩さない。

use crate::filter::filter_by_company;
use crate::table::{Cell, Table};
use crate::year::Year;
use serde::{Deserialize, Serialize};

/// 構造化シートのキー列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredColumns {
    pub company: String,
    pub year: String,
}

impl Default for StructuredColumns {
    fn default() -> Self {
        Self {
            company: "Company".into(),
            year: "Year".into(),
        }
    }
}

/// 系列の1点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: Year,
    pub value: Option<f64>,
}

/// 1社1指標の時系列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub metric: String,
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    pub fn new(metric: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            metric: metric.into(),
            points,
        }
    }

    /// 指標が存在しない場合の空系列
    pub fn empty(metric: impl Into<String>) -> Self {
        Self::new(metric, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn years(&self) -> impl Iterator<Item = &Year> {
        self.points.iter().map(|p| &p.year)
    }

    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// 年度に対応する値（同じ年度が複数あれば最初の点）
    pub fn value_at(&self, year: &Year) -> Option<f64> {
        self.nth_value_at(year, 0)
    }

    /// 同じ年度の `occurrence` 番目（0始まり）の点の値
    pub fn nth_value_at(&self, year: &Year, occurrence: usize) -> Option<f64> {
        self.points
            .iter()
            .filter(|p| &p.year == year)
            .nth(occurrence)
            .and_then(|p| p.value)
    }

    /// 欠損値を除いた算術平均（値がなければ None）
    pub fn mean(&self) -> Option<f64> {
        crate::verdict::mean(self.values())
    }
}

/// 空白や "Unnamed: 3" のような自動生成ヘッダーか
pub fn is_placeholder_header(header: &str) -> bool {
    let trimmed = header.trim();
    trimmed.is_empty() || trimmed.starts_with("Unnamed")
}

/// セルを数値として読む
///
/// 数値セルはそのまま、テキストは前後空白と桁区切りの `,` を除いて解釈する。
/// 読めないものは None（エラーにしない）。
pub fn parse_numeric(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                None
            } else {
                let parsed = cleaned.parse::<f64>().ok();
                if parsed.is_none() {
                    tracing::trace!(cell = %s, "数値として読めないセルを欠損値として扱います");
                }
                parsed
            }
        }
        Cell::Empty | Cell::Bool(_) => None,
    };
    value.filter(|v| v.is_finite())
}

/// ラベル形式の年度軸（列番号, 年度）
///
/// ラベル列と自動生成ヘッダーの列を除いた全列。順序はシート上の順序。
pub fn year_axis(table: &Table, label_column: usize) -> Vec<(usize, Year)> {
    table
        .headers()
        .iter()
        .enumerate()
        .filter(|(col, header)| *col != label_column && !is_placeholder_header(header))
        .map(|(col, header)| (col, Year::from_header(header)))
        .collect()
}

/// ラベル列の部分一致（大文字小文字無視）で最初の行を系列化
pub fn extract_by_label(table: &Table, keyword: &str, label_column: usize) -> MetricSeries {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return MetricSeries::empty(keyword);
    }

    extract_first_row_where(table, keyword, label_column, |label| {
        label.to_lowercase().contains(&needle)
    })
}

/// ラベル列の完全一致（前後空白除去）で最初の行を系列化
///
/// "M Score" / "Z Score" / "F Score" は部分一致だと互いに衝突するため、
/// スコア系はこちらを使う。
pub fn extract_by_exact_label(table: &Table, target: &str, label_column: usize) -> MetricSeries {
    let target = target.trim();
    if target.is_empty() {
        return MetricSeries::empty(target);
    }
    extract_first_row_where(table, target, label_column, |label| label.trim() == target)
}

fn extract_first_row_where<F>(table: &Table, metric: &str, label_column: usize, matches: F) -> MetricSeries
where
    F: Fn(&str) -> bool,
{
    let row = (0..table.len()).find(|&r| matches(&table.cell(r, label_column).to_string()));

    let Some(row) = row else {
        tracing::debug!(sheet = table.name(), metric, "指標行が見つかりません");
        return MetricSeries::empty(metric);
    };

    let points = year_axis(table, label_column)
        .into_iter()
        .map(|(col, year)| SeriesPoint {
            year,
            value: parse_numeric(table.cell(row, col)),
        })
        .collect();

    MetricSeries::new(metric, points)
}

/// 構造化形式: 会社で絞り込み、各行の (Year, 指標列) を系列化
///
/// 指標列がない、または該当会社の行がない場合は空系列。
pub fn extract_structured(
    table: &Table,
    company: &str,
    metric_column: &str,
    columns: &StructuredColumns,
) -> MetricSeries {
    let Some(metric_col) = table.column_index(metric_column) else {
        tracing::debug!(sheet = table.name(), metric = metric_column, "指標列がありません");
        return MetricSeries::empty(metric_column);
    };

    let rows = filter_by_company(table, company, &columns.company);
    if rows.is_empty() {
        tracing::debug!(sheet = table.name(), company, "該当会社の行がありません");
        return MetricSeries::empty(metric_column);
    }

    let year_col = rows.column_index(&columns.year);
    let points = (0..rows.len())
        .map(|r| SeriesPoint {
            year: year_col
                .map(|c| Year::from_cell(rows.cell(r, c)))
                .unwrap_or_else(|| Year::Label(String::new())),
            value: parse_numeric(rows.cell(r, metric_col)),
        })
        .collect();

    MetricSeries::new(metric_column, points)
}
