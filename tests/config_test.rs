//! 設定ファイルのテスト

use forensic_dash::config::{Config, DEFAULT_WORKBOOK, WORKBOOK_ENV};
use forensic_dash_common::LayoutMode;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 保存して読み戻す
#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        workbook_path: Some(PathBuf::from("/data/book.xlsx")),
        layout: LayoutMode::Labeled,
        label_column: 1,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// ファイルがなければデフォルト
#[test]
fn test_config_missing_file_is_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.company_column, "Company");
    assert_eq!(loaded.year_column, "Year");
}

/// 一部の項目だけの設定ファイルも読める
#[test]
fn test_config_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "layout": "structured", "company_column": "Entity" }"#).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.layout, LayoutMode::Structured);
    assert_eq!(loaded.structured_columns().company, "Entity");
    assert_eq!(loaded.structured_columns().year, "Year");
    assert_eq!(loaded.workbook_path, None);
}

/// 壊れた設定ファイルはエラー
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Config::load_from(&path).is_err());
}

/// ブックのパスの優先順（環境変数を触るので1つのテストにまとめる）
#[test]
fn test_resolve_workbook_path_priority() {
    let config = Config {
        workbook_path: Some(PathBuf::from("from_config.xlsx")),
        ..Config::default()
    };

    std::env::remove_var(WORKBOOK_ENV);
    assert_eq!(config.resolve_workbook_path(None), PathBuf::from("from_config.xlsx"));
    assert_eq!(
        Config::default().resolve_workbook_path(None),
        PathBuf::from(DEFAULT_WORKBOOK)
    );

    std::env::set_var(WORKBOOK_ENV, "from_env.xlsx");
    assert_eq!(config.resolve_workbook_path(None), PathBuf::from("from_env.xlsx"));
    assert_eq!(
        config.resolve_workbook_path(Some(Path::new("from_cli.xlsx"))),
        PathBuf::from("from_cli.xlsx")
    );

    std::env::set_var(WORKBOOK_ENV, "  ");
    assert_eq!(config.resolve_workbook_path(None), PathBuf::from("from_config.xlsx"));

    std::env::remove_var(WORKBOOK_ENV);
}
