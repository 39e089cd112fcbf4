//! シート・表の型定義
//!
//! スプレッドシートから読み込んだ値を保持する:
//! - Cell: 1セルの値（保存形式が決める型のみ）
//! - Table: 1シート分（ヘッダー行 + データ行）
//! - Workbook: シート名順に並んだ Table の集合

use serde::{Deserialize, Serialize};
use std::fmt;

/// セル値
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            // 2014.0 → "2014"（会社名・年度ラベルの比較用）
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<Option<f64>> for Cell {
    fn from(n: Option<f64>) -> Self {
        n.map(Cell::Number).unwrap_or(Cell::Empty)
    }
}

static EMPTY_CELL: Cell = Cell::Empty;

/// 1シート分の表
///
/// 先頭行をヘッダーとして扱う。空のヘッダーセルは空文字列のまま保持し、
/// 列の位置はシート上の位置と一致させる。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// ヘッダー名から列番号を取得（前後空白を除いた完全一致）
    pub fn column_index(&self, header: &str) -> Option<usize> {
        let target = header.trim();
        self.headers.iter().position(|h| h.trim() == target)
    }

    /// セル参照。範囲外は空セル
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// 同じ名前・ヘッダーで行だけ差し替えた表を作る
    pub fn with_rows(&self, rows: Vec<Vec<Cell>>) -> Table {
        Table {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows,
        }
    }
}

/// シート名順の表の集合
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Table>,
}

impl Workbook {
    pub fn new(sheets: Vec<Table>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[Table] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|t| t.name() == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|t| t.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheet(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
