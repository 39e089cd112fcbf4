//! スプレッドシート読み込みテスト
//!
//! xlsx を書き出して calamine 経由で読み戻し、Workbook への変換を検証

mod common;

use common::{labeled_sheets, structured_sheets, write_book};
use forensic_dash::error::DashError;
use forensic_dash::loader::load_workbook;
use forensic_dash_common::{Cell, Year};
use tempfile::tempdir;

/// シート順・ヘッダー・セル型がそのまま読み込まれる
#[test]
fn test_load_structured_book() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("financials.xlsx");
    write_book(&path, &structured_sheets());

    let workbook = load_workbook(&path).expect("読み込み失敗");
    assert_eq!(
        workbook.sheet_names(),
        vec!["Financials", "Financial Analysis", "Forensic Analysis"]
    );

    let financials = workbook.sheet("Financials").expect("Financials がない");
    assert_eq!(financials.headers()[0], "Company");
    assert_eq!(financials.len(), 6);
    assert_eq!(financials.cell(0, 0), &Cell::Text("Acme".into()));
    assert_eq!(financials.cell(0, 1), &Cell::Number(2014.0));
    assert_eq!(financials.cell(1, 4), &Cell::Text("n/a".into()));
}

/// 空のヘッダーセルは空文字列として列位置を保つ
#[test]
fn test_blank_header_kept_as_placeholder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("wide.xlsx");
    write_book(&path, &labeled_sheets());

    let workbook = load_workbook(&path).expect("読み込み失敗");
    let acme = workbook.sheet("Acme Ltd").expect("シートがない");

    assert_eq!(acme.headers().len(), 5);
    assert_eq!(acme.headers()[1], "2014");
    assert_eq!(acme.headers()[3], "");
    assert_eq!(acme.headers()[4], "FY2016");
    assert_eq!(Year::from_header(&acme.headers()[4]), Year::Year(2016));
}

/// 左端が空列のシートでも列番号はシート上の位置
#[test]
fn test_leading_blank_column_offset() {
    use common::V::{Blank, N, T};

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("offset.xlsx");
    write_book(
        &path,
        &[(
            "Acme",
            vec![
                vec![Blank, T("Metric"), N(2014.0)],
                vec![Blank, T("Revenue"), N(10.0)],
            ],
        )],
    );

    let workbook = load_workbook(&path).expect("読み込み失敗");
    let table = workbook.sheet("Acme").expect("シートがない");
    assert_eq!(table.headers(), &["".to_string(), "Metric".to_string(), "2014".to_string()]);
    assert_eq!(table.cell(0, 1), &Cell::Text("Revenue".into()));
}

/// 存在しないファイル
#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = load_workbook(&dir.path().join("missing.xlsx"));
    let err = result.unwrap_err();
    assert!(matches!(err, DashError::FileNotFound(_)));
    assert!(err.is_load_error());
}

/// スプレッドシートではないファイル
#[test]
fn test_load_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("corrupt.xlsx");
    std::fs::write(&path, "{ not a workbook }").unwrap();

    let err = load_workbook(&path).unwrap_err();
    assert!(matches!(err, DashError::Load { .. }));
    assert!(format!("{}", err).contains("corrupt.xlsx"));
}
