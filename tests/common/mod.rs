//! テスト用ブックの生成
//!
//! rust_xlsxwriter で xlsx を書き出し、calamine 経由の読み込みを通して検証する。

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// セルの値
#[derive(Clone, Copy)]
pub enum V {
    T(&'static str),
    N(f64),
    Blank,
}

pub type Sheet = (&'static str, Vec<Vec<V>>);

pub fn write_book(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("シート名設定失敗");
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                match value {
                    V::T(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).expect("書き込み失敗");
                    }
                    V::N(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).expect("書き込み失敗");
                    }
                    V::Blank => {}
                }
            }
        }
    }
    workbook.save(path).expect("ブック保存失敗");
}

use V::{Blank, N, T};

/// 3シート構成（Financials / Financial Analysis / Forensic Analysis）
///
/// - Acme: 2014-2016、M < -2.22 かつ Z > 3.0 → strong
/// - Beta: 2014-2015、M > -2.22 かつ Z < 1.8 → high probability
/// - Gamma: Financials のみ（フォレンジック行なし → 判定なし）
pub fn structured_sheets() -> Vec<Sheet> {
    vec![
        (
            "Financials",
            vec![
                vec![T("Company"), T("Year"), T("Revenue"), T("Profit"), T("CFO")],
                vec![T("Acme"), N(2014.0), N(1000.0), N(100.0), N(90.0)],
                vec![T("Acme"), N(2015.0), N(1100.0), N(120.0), T("n/a")],
                vec![T("Acme"), N(2016.0), N(1250.0), N(140.0), N(130.0)],
                vec![T("Beta"), N(2014.0), N(500.0), N(-20.0), N(-5.0)],
                vec![T("Beta"), N(2015.0), N(450.0), N(-40.0), N(-15.0)],
                vec![T("Gamma"), N(2014.0), N(50.0), N(5.0), N(4.0)],
            ],
        ),
        (
            "Financial Analysis",
            vec![
                vec![
                    T("Company"),
                    T("Year"),
                    T("DSO"),
                    T("DPO"),
                    T("DIO"),
                    T("CCC"),
                    T("WCR"),
                    T("Cash Ratio"),
                    T("Net Profit Margin"),
                    T("Asset Turnover"),
                    T("Equity Multiplier"),
                    T("ROE"),
                ],
                vec![T("Acme"), N(2014.0), N(45.0), N(30.0), N(60.0), N(75.0), N(1.8), N(0.4), N(0.1), N(1.2), N(2.0), N(0.24)],
                vec![T("Acme"), N(2015.0), N(44.0), N(31.0), N(58.0), N(71.0), N(1.9), N(0.5), N(0.11), N(1.25), N(2.0), N(0.275)],
                vec![T("Acme"), N(2016.0), N(42.0), N(33.0), N(55.0), N(64.0), N(2.0), N(0.6), N(0.112), N(1.3), N(1.9), N(0.2766)],
                vec![T("Beta"), N(2014.0), N(90.0), N(20.0), N(120.0), N(190.0), N(0.9), N(0.1), N(-0.04), N(0.8), N(3.5), N(-0.112)],
            ],
        ),
        (
            "Forensic Analysis",
            vec![
                vec![T("Company"), T("Year"), T("M_Score"), T("F_Score"), T("Z_Score"), T("Accruals")],
                vec![T("Acme"), N(2014.0), N(-2.6), N(7.0), N(3.4), N(0.02)],
                vec![T("Acme"), N(2015.0), N(-2.5), N(8.0), N(3.6), N(0.03)],
                vec![T("Acme"), N(2016.0), N(-2.7), N(8.0), N(3.8), Blank],
                vec![T("Beta"), N(2014.0), N(-1.2), N(3.0), N(1.1), N(0.15)],
                vec![T("Beta"), N(2015.0), N(-0.8), N(2.0), N(1.3), N(0.2)],
            ],
        ),
    ]
}

/// 1社1シートのラベル形式（空ヘッダー列を含む）
pub fn labeled_sheets() -> Vec<Sheet> {
    vec![
        (
            "Acme Ltd",
            vec![
                vec![T("Particulars"), N(2014.0), N(2015.0), Blank, T("FY2016")],
                vec![T("Net Revenue"), N(1000.0), N(1100.0), T("note"), N(1250.0)],
                vec![T("Sales Revenue"), N(1.0), N(2.0), Blank, N(3.0)],
                vec![T("Net Profit"), N(100.0), N(120.0), Blank, N(140.0)],
                vec![T("Cash Flow from Operations"), N(90.0), T("--"), Blank, N(130.0)],
                vec![T("M Score"), N(-2.6), N(-2.5), Blank, N(-2.7)],
                vec![T("Z Score"), N(3.4), N(3.6), Blank, N(3.8)],
                vec![T("F Score"), N(7.0), N(8.0), Blank, N(8.0)],
                vec![T("Total ACCRUALS"), N(0.02), N(0.03), Blank, T("1,500")],
            ],
        ),
        (
            "Beta Inc",
            vec![
                vec![T("Particulars"), N(2014.0), N(2015.0)],
                vec![T("Revenue"), N(500.0), N(450.0)],
                vec![T("M Score"), N(-1.2), N(-0.8)],
            ],
        ),
    ]
}
