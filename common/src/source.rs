//! 入力ファイル形式ごとの取得戦略
//!
//! - Structured: "Financials" / "Financial Analysis" / "Forensic Analysis" の3シート、
//!   Company・Year 列と指標列を持つ縦持ち形式（主経路）
//! - LabeledWide: 1社1シート、先頭列（設定可）が指標ラベルで年度が横に並ぶ形式

use crate::catalog::{LabelMatch, MetricSpec, DUPONT_COLUMNS, DUPONT_METRICS, STRUCTURED_SHEETS};
use crate::dashboard::DupontTable;
use crate::error::{Error, Result};
use crate::extract::{
    extract_by_exact_label, extract_by_label, extract_structured, year_axis, MetricSeries,
    StructuredColumns,
};
use crate::filter::{distinct_companies, filter_by_company};
use crate::table::{Cell, Table, Workbook};
use crate::year::Year;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 形式の選択（設定値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// 3シートが揃っていれば Structured、そうでなければ LabeledWide
    #[default]
    Auto,
    Structured,
    Labeled,
}

impl FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(LayoutMode::Auto),
            "structured" | "s" => Ok(LayoutMode::Structured),
            "labeled" | "labelled" | "wide" | "l" => Ok(LayoutMode::Labeled),
            _ => Err(Error::Parse(format!(
                "Unknown layout: {}. Use auto, structured, or labeled",
                s
            ))),
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMode::Auto => write!(f, "auto"),
            LayoutMode::Structured => write!(f, "structured"),
            LayoutMode::Labeled => write!(f, "labeled"),
        }
    }
}

/// 構造化形式の取得元
#[derive(Debug, Clone)]
pub struct StructuredSource<'a> {
    workbook: &'a Workbook,
    columns: StructuredColumns,
}

impl<'a> StructuredSource<'a> {
    pub fn new(workbook: &'a Workbook, columns: StructuredColumns) -> Self {
        Self { workbook, columns }
    }

    /// 会社一覧（Financials を優先し、なければ他のシートから初出順に集める）
    pub fn companies(&self) -> Vec<String> {
        let mut companies: Vec<String> = Vec::new();
        for sheet in STRUCTURED_SHEETS {
            let Some(table) = self.workbook.sheet(sheet) else { continue };
            for name in distinct_companies(table, &self.columns.company) {
                if !companies.contains(&name) {
                    companies.push(name);
                }
            }
            if !companies.is_empty() {
                break;
            }
        }
        companies
    }

    pub fn series(&self, sheet: &str, company: &str, spec: &MetricSpec) -> MetricSeries {
        match self.workbook.sheet(sheet) {
            Some(table) => {
                let mut series = extract_structured(table, company, spec.column, &self.columns);
                series.metric = spec.name.to_string();
                series
            }
            None => {
                tracing::debug!(sheet, metric = spec.name, "シートがありません");
                MetricSeries::empty(spec.name)
            }
        }
    }

    /// DuPont分析表（Financial Analysis の該当行をそのまま）
    pub fn dupont(&self, company: &str) -> DupontTable {
        let Some(table) = self.workbook.sheet(crate::catalog::FINANCIAL_ANALYSIS_SHEET) else {
            return DupontTable::empty();
        };

        let rows = filter_by_company(table, company, &self.columns.company);
        let columns: Vec<(String, usize)> = DUPONT_COLUMNS
            .iter()
            .map(|name| if *name == "Year" { self.columns.year.as_str() } else { *name })
            .filter_map(|name| rows.column_index(name).map(|idx| (name.to_string(), idx)))
            .collect();

        let headers = columns.iter().map(|(name, _)| name.clone()).collect();
        let body = (0..rows.len())
            .map(|r| columns.iter().map(|(_, c)| rows.cell(r, *c).clone()).collect())
            .collect();

        DupontTable::new(headers, body)
    }
}

/// ラベル形式の取得元（シート名 = 会社名）
#[derive(Debug, Clone)]
pub struct LabeledWideSource<'a> {
    workbook: &'a Workbook,
    label_column: usize,
}

impl<'a> LabeledWideSource<'a> {
    pub fn new(workbook: &'a Workbook, label_column: usize) -> Self {
        Self {
            workbook,
            label_column,
        }
    }

    pub fn companies(&self) -> Vec<String> {
        self.workbook
            .sheet_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn series(&self, company: &str, spec: &MetricSpec) -> MetricSeries {
        let Some(table) = self.workbook.sheet(company) else {
            tracing::debug!(company, "会社のシートがありません");
            return MetricSeries::empty(spec.name);
        };
        let mut series = self.lookup(table, spec);
        series.metric = spec.name.to_string();
        series
    }

    fn lookup(&self, table: &Table, spec: &MetricSpec) -> MetricSeries {
        match spec.label {
            LabelMatch::Exact(target) => extract_by_exact_label(table, target, self.label_column),
            LabelMatch::Keywords(keywords) => keywords
                .iter()
                .map(|k| extract_by_label(table, k, self.label_column))
                .find(|s| !s.is_empty())
                .unwrap_or_else(|| MetricSeries::empty(spec.name)),
        }
    }

    /// DuPont分析表（年度軸 × 構成指標の行を組み立てる）
    pub fn dupont(&self, company: &str) -> DupontTable {
        let Some(table) = self.workbook.sheet(company) else {
            return DupontTable::empty();
        };

        let found: Vec<MetricSeries> = DUPONT_METRICS
            .iter()
            .map(|spec| self.lookup(table, spec))
            .collect();
        if found.iter().all(MetricSeries::is_empty) {
            return DupontTable::empty();
        }

        let years: Vec<Year> = year_axis(table, self.label_column)
            .into_iter()
            .map(|(_, year)| year)
            .collect();

        let headers = DUPONT_COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = years
            .iter()
            .map(|year| {
                let mut row = vec![match year {
                    Year::Year(y) => Cell::Number(f64::from(*y)),
                    Year::Label(label) => Cell::Text(label.clone()),
                }];
                row.extend(found.iter().map(|s| Cell::from(s.value_at(year))));
                row
            })
            .collect();

        DupontTable::new(headers, rows)
    }
}

/// 取得戦略（タグ付きバリアント）
#[derive(Debug, Clone)]
pub enum Source<'a> {
    Structured(StructuredSource<'a>),
    LabeledWide(LabeledWideSource<'a>),
}

impl<'a> Source<'a> {
    /// 設定と実際のシート構成から取得戦略を決める
    ///
    /// Structured 指定で3シートのどれもない場合はエラー。
    pub fn detect(
        workbook: &'a Workbook,
        mode: LayoutMode,
        columns: StructuredColumns,
        label_column: usize,
    ) -> Result<Self> {
        let has_all = STRUCTURED_SHEETS.iter().all(|s| workbook.contains(s));
        let has_any = STRUCTURED_SHEETS.iter().any(|s| workbook.contains(s));

        let source = match mode {
            LayoutMode::Auto if has_all => Source::Structured(StructuredSource::new(workbook, columns)),
            LayoutMode::Auto => Source::LabeledWide(LabeledWideSource::new(workbook, label_column)),
            LayoutMode::Structured if has_any => {
                Source::Structured(StructuredSource::new(workbook, columns))
            }
            LayoutMode::Structured => {
                return Err(Error::Layout(format!(
                    "structured layout requires sheets {:?}, found {:?}",
                    STRUCTURED_SHEETS,
                    workbook.sheet_names()
                )))
            }
            LayoutMode::Labeled => Source::LabeledWide(LabeledWideSource::new(workbook, label_column)),
        };

        tracing::debug!(layout = source.kind(), sheets = workbook.len(), "取得戦略を決定");
        Ok(source)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Structured(_) => "structured",
            Source::LabeledWide(_) => "labeled",
        }
    }

    /// 会社の選択肢（閉じた一覧）
    pub fn companies(&self) -> Vec<String> {
        match self {
            Source::Structured(s) => s.companies(),
            Source::LabeledWide(s) => s.companies(),
        }
    }

    pub fn series(&self, section: crate::catalog::Section, company: &str, spec: &MetricSpec) -> MetricSeries {
        match self {
            Source::Structured(s) => s.series(section.structured_sheet(), company, spec),
            Source::LabeledWide(s) => s.series(company, spec),
        }
    }

    pub fn dupont(&self, company: &str) -> DupontTable {
        match self {
            Source::Structured(s) => s.dupont(company),
            Source::LabeledWide(s) => s.dupont(company),
        }
    }
}
