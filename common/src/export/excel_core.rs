//! Excel生成（共通ライブラリ）
//!
//! 1社1シートでダッシュボードの内容を書き出す:
//! 判定 → フォレンジック平均 → セクションごとの系列表 → DuPont分析表

use crate::catalog::Section;
use crate::dashboard::{Dashboard, SectionSeries};
use crate::table::Cell;
use rust_xlsxwriter::*;

/// シート名の最大長（Excelの制限）
const MAX_SHEET_NAME_LEN: usize = 31;
const LABEL_COL_WIDTH: f64 = 22.0;
const VALUE_COL_WIDTH: f64 = 12.0;

/// Excelで使えない文字を置き換え、31文字に切り詰める
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();
    let truncated: String = cleaned.chars().take(MAX_SHEET_NAME_LEN).collect();
    if truncated.is_empty() {
        "Sheet".to_string()
    } else {
        truncated
    }
}

/// 重複しないシート名を割り当てる（大文字小文字は区別しない）
fn unique_sheet_name(name: &str, used: &mut Vec<String>) -> String {
    let base = sanitize_sheet_name(name);
    let mut candidate = base.clone();
    let mut n = 2;
    while used.iter().any(|u| u.eq_ignore_ascii_case(&candidate)) {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
        candidate = format!("{}{}", base.chars().take(keep).collect::<String>(), suffix);
        n += 1;
    }
    used.push(candidate.clone());
    candidate
}

struct Formats {
    title: Format,
    header: Format,
    label: Format,
    value: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(14.0),
            header: Format::new()
                .set_bold()
                .set_font_color(Color::RGB(0x333333))
                .set_background_color(Color::RGB(0xE8EEF4))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::RGB(0xAAAAAA)),
            label: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0xF5F5F5))
                .set_border(FormatBorder::Hair)
                .set_border_color(Color::RGB(0xAAAAAA)),
            value: Format::new()
                .set_num_format("#,##0.00")
                .set_border(FormatBorder::Hair)
                .set_border_color(Color::RGB(0xCCCCCC)),
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: &Format,
) -> Result<(), String> {
    match cell {
        Cell::Empty => Ok(()),
        Cell::Number(n) => worksheet
            .write_number_with_format(row, col, *n, format)
            .map(|_| ())
            .map_err(|e| format!("数値書き込みエラー: {}", e)),
        Cell::Text(s) => worksheet
            .write_string_with_format(row, col, s, format)
            .map(|_| ())
            .map_err(|e| format!("文字列書き込みエラー: {}", e)),
        Cell::Bool(b) => worksheet
            .write_boolean_with_format(row, col, *b, format)
            .map(|_| ())
            .map_err(|e| format!("真偽値書き込みエラー: {}", e)),
    }
}

fn write_label(worksheet: &mut Worksheet, row: u32, col: u16, text: &str, format: &Format) -> Result<(), String> {
    worksheet
        .write_string_with_format(row, col, text, format)
        .map(|_| ())
        .map_err(|e| format!("ラベル書き込みエラー: {}", e))
}

/// セクションの系列表を書き込み、次の空き行を返す
fn write_section(
    worksheet: &mut Worksheet,
    start_row: u32,
    section: &SectionSeries,
    formats: &Formats,
) -> Result<u32, String> {
    let mut row = start_row;
    write_label(worksheet, row, 0, section.section.title(), &formats.title)?;
    row += 1;

    let axis = section.year_axis();
    write_label(worksheet, row, 0, "Metric", &formats.header)?;
    for (i, column) in axis.iter().enumerate() {
        write_label(worksheet, row, (i + 1) as u16, &column.header(), &formats.header)?;
    }
    row += 1;

    for series in &section.series {
        write_label(worksheet, row, 0, &series.metric, &formats.label)?;
        for (i, column) in axis.iter().enumerate() {
            let cell = Cell::from(column.value_in(series));
            write_cell(worksheet, row, (i + 1) as u16, &cell, &formats.value)?;
        }
        row += 1;
    }

    Ok(row + 1)
}

fn write_dashboard(worksheet: &mut Worksheet, dashboard: &Dashboard, formats: &Formats) -> Result<(), String> {
    worksheet
        .set_column_width(0, LABEL_COL_WIDTH)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    for col in 1..=16u16 {
        worksheet
            .set_column_width(col, VALUE_COL_WIDTH)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
    }

    write_label(worksheet, 0, 0, &dashboard.company, &formats.title)?;
    write_label(worksheet, 1, 0, "Verdict", &formats.label)?;
    write_label(worksheet, 1, 1, dashboard.verdict_text(), &formats.value)?;

    let averages = [
        ("Avg M_Score", dashboard.aggregate.avg_m_score),
        ("Avg Z_Score", dashboard.aggregate.avg_z_score),
        ("Avg F_Score", dashboard.aggregate.avg_f_score),
        ("Avg Accruals", dashboard.aggregate.avg_accruals),
    ];
    let mut row = 2;
    for (label, value) in averages {
        write_label(worksheet, row, 0, label, &formats.label)?;
        write_cell(worksheet, row, 1, &Cell::from(value), &formats.value)?;
        row += 1;
    }
    row += 1;

    for section in Section::ALL {
        if let Some(data) = dashboard.section(section) {
            row = write_section(worksheet, row, data, formats)?;
        }
    }

    write_label(worksheet, row, 0, "DuPont Analysis", &formats.title)?;
    row += 1;
    for (i, header) in dashboard.dupont.headers.iter().enumerate() {
        write_label(worksheet, row, i as u16, header, &formats.header)?;
    }
    row += 1;
    for cells in &dashboard.dupont.rows {
        for (i, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, i as u16, cell, &formats.value)?;
        }
        row += 1;
    }

    Ok(())
}

/// ダッシュボード群をExcelバッファに生成
///
/// # Arguments
/// * `dashboards` - 1社1シートで書き出すダッシュボード
pub fn generate_dashboard_buffer(dashboards: &[Dashboard]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let formats = Formats::new();
    let mut used_names = Vec::new();

    for dashboard in dashboards {
        let sheet_name = unique_sheet_name(&dashboard.company, &mut used_names);
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        write_dashboard(worksheet, dashboard, &formats)?;
    }

    // 空のブックは保存できないため空シートを1枚置く
    if dashboards.is_empty() {
        workbook.add_worksheet();
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
