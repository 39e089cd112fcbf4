//! ダッシュボードの指標カタログ
//!
//! 各セクションに表示する指標と、その取得元:
//! - 構造化形式: シート名 + 列名
//! - ラベル形式: ラベルのキーワード（部分一致）またはスコア名（完全一致）

use serde::{Deserialize, Serialize};

pub const FINANCIALS_SHEET: &str = "Financials";
pub const FINANCIAL_ANALYSIS_SHEET: &str = "Financial Analysis";
pub const FORENSIC_ANALYSIS_SHEET: &str = "Forensic Analysis";

/// 構造化形式で必要なシート
pub const STRUCTURED_SHEETS: [&str; 3] = [
    FINANCIALS_SHEET,
    FINANCIAL_ANALYSIS_SHEET,
    FORENSIC_ANALYSIS_SHEET,
];

/// DuPont分析表の列（表示順）
pub const DUPONT_COLUMNS: [&str; 5] = [
    "Year",
    "Net Profit Margin",
    "Asset Turnover",
    "Equity Multiplier",
    "ROE",
];

/// グラフ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// ダッシュボードのセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Snapshot,
    Efficiency,
    Liquidity,
    Forensic,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Snapshot,
        Section::Efficiency,
        Section::Liquidity,
        Section::Forensic,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Snapshot => "Company Snapshot",
            Section::Efficiency => "Efficiency Analysis",
            Section::Liquidity => "Liquidity Analysis",
            Section::Forensic => "Forensic Indicators",
        }
    }

    pub fn chart(&self) -> ChartKind {
        match self {
            Section::Forensic => ChartKind::Bar,
            _ => ChartKind::Line,
        }
    }

    /// 構造化形式での取得元シート
    pub fn structured_sheet(&self) -> &'static str {
        match self {
            Section::Snapshot => FINANCIALS_SHEET,
            Section::Efficiency | Section::Liquidity => FINANCIAL_ANALYSIS_SHEET,
            Section::Forensic => FORENSIC_ANALYSIS_SHEET,
        }
    }

    pub fn metrics(&self) -> &'static [MetricSpec] {
        match self {
            Section::Snapshot => SNAPSHOT_METRICS,
            Section::Efficiency => EFFICIENCY_METRICS,
            Section::Liquidity => LIQUIDITY_METRICS,
            Section::Forensic => FORENSIC_METRICS,
        }
    }
}

/// ラベル形式での行の探し方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    /// キーワードを順に試し、最初に見つかった行（部分一致・大文字小文字無視）
    Keywords(&'static [&'static str]),
    /// 前後空白を除いた完全一致
    Exact(&'static str),
}

/// 指標定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// 表示名（系列名）
    pub name: &'static str,
    /// 構造化形式の列名
    pub column: &'static str,
    pub label: LabelMatch,
}

pub const REVENUE: MetricSpec = MetricSpec {
    name: "Revenue",
    column: "Revenue",
    label: LabelMatch::Keywords(&["revenue", "sales"]),
};
pub const PROFIT: MetricSpec = MetricSpec {
    name: "Profit",
    column: "Profit",
    label: LabelMatch::Keywords(&["net profit", "profit"]),
};
pub const CFO: MetricSpec = MetricSpec {
    name: "CFO",
    column: "CFO",
    label: LabelMatch::Keywords(&["cash flow from operat", "operating cash flow", "cfo"]),
};

pub const DSO: MetricSpec = MetricSpec {
    name: "DSO",
    column: "DSO",
    label: LabelMatch::Keywords(&["dso", "days sales outstanding"]),
};
pub const DPO: MetricSpec = MetricSpec {
    name: "DPO",
    column: "DPO",
    label: LabelMatch::Keywords(&["dpo", "days payable"]),
};
pub const DIO: MetricSpec = MetricSpec {
    name: "DIO",
    column: "DIO",
    label: LabelMatch::Keywords(&["dio", "days inventory"]),
};
pub const CCC: MetricSpec = MetricSpec {
    name: "CCC",
    column: "CCC",
    label: LabelMatch::Keywords(&["ccc", "cash conversion"]),
};

pub const WCR: MetricSpec = MetricSpec {
    name: "WCR",
    column: "WCR",
    label: LabelMatch::Keywords(&["wcr", "working capital"]),
};
pub const CASH_RATIO: MetricSpec = MetricSpec {
    name: "Cash Ratio",
    column: "Cash Ratio",
    label: LabelMatch::Keywords(&["cash ratio"]),
};

pub const NET_PROFIT_MARGIN: MetricSpec = MetricSpec {
    name: "Net Profit Margin",
    column: "Net Profit Margin",
    label: LabelMatch::Keywords(&["net profit margin", "npm"]),
};
pub const ASSET_TURNOVER: MetricSpec = MetricSpec {
    name: "Asset Turnover",
    column: "Asset Turnover",
    label: LabelMatch::Keywords(&["asset turnover"]),
};
pub const EQUITY_MULTIPLIER: MetricSpec = MetricSpec {
    name: "Equity Multiplier",
    column: "Equity Multiplier",
    label: LabelMatch::Keywords(&["equity multiplier"]),
};
pub const ROE: MetricSpec = MetricSpec {
    name: "ROE",
    column: "ROE",
    label: LabelMatch::Keywords(&["roe", "return on equity"]),
};

pub const M_SCORE: MetricSpec = MetricSpec {
    name: "M_Score",
    column: "M_Score",
    label: LabelMatch::Exact("M Score"),
};
pub const F_SCORE: MetricSpec = MetricSpec {
    name: "F_Score",
    column: "F_Score",
    label: LabelMatch::Exact("F Score"),
};
pub const Z_SCORE: MetricSpec = MetricSpec {
    name: "Z_Score",
    column: "Z_Score",
    label: LabelMatch::Exact("Z Score"),
};
pub const ACCRUALS: MetricSpec = MetricSpec {
    name: "Accruals",
    column: "Accruals",
    label: LabelMatch::Keywords(&["accrual"]),
};

pub const SNAPSHOT_METRICS: &[MetricSpec] = &[REVENUE, PROFIT, CFO];
pub const EFFICIENCY_METRICS: &[MetricSpec] = &[DSO, DPO, DIO, CCC];
pub const LIQUIDITY_METRICS: &[MetricSpec] = &[WCR, CASH_RATIO];
pub const FORENSIC_METRICS: &[MetricSpec] = &[M_SCORE, F_SCORE, Z_SCORE, ACCRUALS];

/// DuPont分析の構成指標（Year 列を除く）
pub const DUPONT_METRICS: &[MetricSpec] = &[NET_PROFIT_MARGIN, ASSET_TURNOVER, EQUITY_MULTIPLIER, ROE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_cover_all_metrics() {
        let total: usize = Section::ALL.iter().map(|s| s.metrics().len()).sum();
        assert_eq!(total, 13);
    }

    #[test]
    fn test_dupont_columns_match_metrics() {
        let names: Vec<&str> = DUPONT_METRICS.iter().map(|m| m.column).collect();
        assert_eq!(&DUPONT_COLUMNS[1..], names.as_slice());
    }

    #[test]
    fn test_scores_use_exact_labels() {
        for spec in [M_SCORE, F_SCORE, Z_SCORE] {
            assert!(matches!(spec.label, LabelMatch::Exact(_)), "{}", spec.name);
        }
    }

    #[test]
    fn test_forensic_section_is_bar_chart() {
        assert_eq!(Section::Forensic.chart(), ChartKind::Bar);
        assert_eq!(Section::Snapshot.chart(), ChartKind::Line);
        assert_eq!(Section::Liquidity.structured_sheet(), FINANCIAL_ANALYSIS_SHEET);
    }
}
