//! テキスト表示
//!
//! ダッシュボードを端末向けの表に整形する。

use forensic_dash_common::catalog::ChartKind;
use forensic_dash_common::{Cell, Dashboard, SectionSeries};
use std::fmt::Write;

const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 11;
const MISSING: &str = "-";

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => MISSING.to_string(),
    }
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => MISSING.to_string(),
        Cell::Number(n) if n.fract() == 0.0 => cell.to_string(),
        Cell::Number(n) => format!("{:.2}", n),
        other => other.to_string(),
    }
}

fn render_section(out: &mut String, section: &SectionSeries) {
    let chart = match section.section.chart() {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
    };
    let _ = writeln!(out, "■ {} ({})", section.section.title(), chart);

    let axis = section.year_axis();
    if axis.is_empty() {
        let _ = writeln!(out, "  (データなし)\n");
        return;
    }

    let _ = write!(out, "  {:<LABEL_WIDTH$}", "Metric");
    for column in &axis {
        let _ = write!(out, "{:>VALUE_WIDTH$}", column.header());
    }
    out.push('\n');

    for series in &section.series {
        let _ = write!(out, "  {:<LABEL_WIDTH$}", series.metric);
        if series.is_empty() {
            let _ = write!(out, "{:>VALUE_WIDTH$}", "(なし)");
        } else {
            for column in &axis {
                let _ = write!(out, "{:>VALUE_WIDTH$}", format_value(column.value_in(series)));
            }
        }
        out.push('\n');
    }
    out.push('\n');
}

/// 1社分のダッシュボードを表示用文字列に
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} === [{}]\n", dashboard.company, dashboard.layout);

    for section in &dashboard.sections {
        render_section(&mut out, section);
    }

    let _ = writeln!(out, "■ DuPont Analysis");
    if dashboard.dupont.is_empty() {
        let _ = writeln!(out, "  (データなし)");
    } else {
        let _ = write!(out, " ");
        for header in &dashboard.dupont.headers {
            let _ = write!(out, "{:>LABEL_WIDTH$}", header);
        }
        out.push('\n');
        for row in &dashboard.dupont.rows {
            let _ = write!(out, " ");
            for cell in row {
                let _ = write!(out, "{:>LABEL_WIDTH$}", format_cell(cell));
            }
            out.push('\n');
        }
    }
    out.push('\n');

    let agg = &dashboard.aggregate;
    let _ = writeln!(out, "■ Forensic Verdict");
    let _ = writeln!(out, "  平均 M_Score : {}", format_value(agg.avg_m_score));
    let _ = writeln!(out, "  平均 Z_Score : {}", format_value(agg.avg_z_score));
    let _ = writeln!(out, "  平均 F_Score : {}", format_value(agg.avg_f_score));
    let _ = writeln!(out, "  平均 Accruals: {}", format_value(agg.avg_accruals));
    let _ = writeln!(out, "  判定: {}", dashboard.verdict_text());

    out
}

/// 全社の判定一覧
pub fn render_verdict_summary(dashboards: &[Dashboard]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}  {:<9} Verdict",
        "Company", "Avg M", "Avg Z", "Accruals", "Risk"
    );
    for d in dashboards {
        let risk = d.verdict.map(|v| v.risk_level()).unwrap_or(MISSING);
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}  {:<9} {}",
            d.company,
            format_value(d.aggregate.avg_m_score),
            format_value(d.aggregate.avg_z_score),
            format_value(d.aggregate.avg_accruals),
            risk,
            d.verdict_text()
        );
    }
    out
}
