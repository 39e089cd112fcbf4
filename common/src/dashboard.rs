//! ダッシュボードの組み立て
//!
//! 取得戦略（Source）から1社分の表示データをまとめる。
//! 表示側はこの構造体だけを受け取り、描画・レイアウトを担当する。

use crate::catalog::{Section, ACCRUALS, F_SCORE, M_SCORE, Z_SCORE};
use crate::error::Result;
use crate::extract::MetricSeries;
use crate::source::Source;
use crate::table::Cell;
use crate::verdict::{ForensicAggregate, Verdict};
use crate::year::Year;
use serde::{Deserialize, Serialize};

/// 判定できない場合の表示文
pub const NO_VERDICT: &str = "no verdict";

/// DuPont分析表（シートの値をそのまま保持）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DupontTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DupontTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 表の1列（同じ年度の行が複数あれば出現順で別の列にする）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisColumn {
    pub year: Year,
    pub occurrence: usize,
}

impl AxisColumn {
    pub fn new(year: Year, occurrence: usize) -> Self {
        Self { year, occurrence }
    }

    /// 列見出し（年度が空なら "-"）
    pub fn header(&self) -> String {
        match &self.year {
            Year::Label(label) if label.trim().is_empty() => "-".to_string(),
            year => year.to_string(),
        }
    }

    pub fn value_in(&self, series: &MetricSeries) -> Option<f64> {
        series.nth_value_at(&self.year, self.occurrence)
    }
}

/// セクション1つ分の系列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSeries {
    pub section: Section,
    pub series: Vec<MetricSeries>,
}

impl SectionSeries {
    /// 系列の年度を初出順に合わせた軸（空系列は寄与しない）
    ///
    /// 重複した年度や空の年度ラベルも点の数だけ列を持つ。
    pub fn year_axis(&self) -> Vec<AxisColumn> {
        let mut axis: Vec<AxisColumn> = Vec::new();
        for series in &self.series {
            let mut seen: Vec<&Year> = Vec::new();
            for year in series.years() {
                let occurrence = seen.iter().filter(|y| **y == year).count();
                seen.push(year);
                let column = AxisColumn::new(year.clone(), occurrence);
                if !axis.contains(&column) {
                    axis.push(column);
                }
            }
        }
        axis
    }
}

/// 1社分のダッシュボード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub company: String,
    pub layout: String,
    pub sections: Vec<SectionSeries>,
    pub dupont: DupontTable,
    pub aggregate: ForensicAggregate,
    pub verdict: Option<Verdict>,
}

impl Dashboard {
    pub fn section(&self, section: Section) -> Option<&SectionSeries> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// 系列名で検索
    pub fn series(&self, metric: &str) -> Option<&MetricSeries> {
        self.sections
            .iter()
            .flat_map(|s| s.series.iter())
            .find(|s| s.metric == metric)
    }

    pub fn verdict_text(&self) -> &'static str {
        self.verdict.map(|v| v.text()).unwrap_or(NO_VERDICT)
    }

    /// 全系列が空か（会社の行がどのシートにもない状態）
    pub fn has_no_data(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.series.iter().all(MetricSeries::is_empty))
            && self.dupont.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 1社分のダッシュボードを組み立てる
///
/// 指標が見つからない場合は空の系列のまま返し、全体は失敗させない。
pub fn build_dashboard(source: &Source<'_>, company: &str) -> Dashboard {
    let sections: Vec<SectionSeries> = Section::ALL
        .iter()
        .map(|&section| SectionSeries {
            section,
            series: section
                .metrics()
                .iter()
                .map(|spec| source.series(section, company, spec))
                .collect(),
        })
        .collect();

    let forensic = |name: &str| {
        sections
            .iter()
            .filter(|s| s.section == Section::Forensic)
            .flat_map(|s| s.series.iter())
            .find(|s| s.metric == name)
            .cloned()
            .unwrap_or_else(|| MetricSeries::empty(name))
    };

    let aggregate = ForensicAggregate::from_series(
        &forensic(M_SCORE.name),
        &forensic(Z_SCORE.name),
        &forensic(F_SCORE.name),
        &forensic(ACCRUALS.name),
    );
    let verdict = aggregate.verdict();
    if verdict.is_none() {
        tracing::debug!(company, "M/Z スコアがないため判定なし");
    }

    Dashboard {
        company: company.to_string(),
        layout: source.kind().to_string(),
        dupont: source.dupont(company),
        sections,
        aggregate,
        verdict,
    }
}

/// 全社分を組み立てる（選択肢の順序）
pub fn build_all(source: &Source<'_>) -> Vec<Dashboard> {
    source
        .companies()
        .iter()
        .map(|company| build_dashboard(source, company))
        .collect()
}
