//! 年度軸のキー
//!
//! ヘッダーや Year 列の値を年度（整数）またはラベルとして解釈する。
//! "2014" / 2014.0 / "FY2014" / "FY 2014" → Year(2014)、それ以外はラベルのまま。

use crate::table::Cell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_YEAR: i64 = 1800;
const MAX_YEAR: i64 = 2200;

/// 年度キー（整数またはラベル）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Year(i32),
    Label(String),
}

impl Year {
    /// ヘッダー文字列から年度を解釈
    pub fn from_header(header: &str) -> Year {
        let trimmed = header.trim();

        if let Ok(n) = trimmed.parse::<i64>() {
            if (MIN_YEAR..=MAX_YEAR).contains(&n) {
                return Year::Year(n as i32);
            }
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.fract() == 0.0 && (MIN_YEAR as f64..=MAX_YEAR as f64).contains(&n) {
                return Year::Year(n as i32);
            }
            // 数値として読めるものは年の埋め込みとみなさない（"2014.5"）
            return Year::Label(trimmed.to_string());
        }

        lazy_static::lazy_static! {
            static ref DIGIT_RUN_RE: Regex = Regex::new(r"\d+").unwrap();
        }

        // 4桁の年が1つだけ含まれる場合のみ採用（"2014-2015" はラベル扱い）
        let mut found = DIGIT_RUN_RE
            .find_iter(trimmed)
            .filter(|m| m.as_str().len() == 4)
            .filter_map(|m| m.as_str().parse::<i64>().ok())
            .filter(|n| (MIN_YEAR..=MAX_YEAR).contains(n));
        match (found.next(), found.next()) {
            (Some(year), None) => Year::Year(year as i32),
            _ => Year::Label(trimmed.to_string()),
        }
    }

    /// セル値から年度を解釈（構造化シートの Year 列用）
    pub fn from_cell(cell: &Cell) -> Year {
        match cell {
            Cell::Number(n) if n.fract() == 0.0 && (MIN_YEAR as f64..=MAX_YEAR as f64).contains(n) => {
                Year::Year(*n as i32)
            }
            other => Year::from_header(&other.to_string()),
        }
    }

}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Year(y) => write!(f, "{}", y),
            Year::Label(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_plain_year() {
        assert_eq!(Year::from_header("2014"), Year::Year(2014));
        assert_eq!(Year::from_header(" 2025 "), Year::Year(2025));
        assert_eq!(Year::from_header("2014.0"), Year::Year(2014));
    }

    #[test]
    fn test_from_header_embedded_year() {
        assert_eq!(Year::from_header("FY2014"), Year::Year(2014));
        assert_eq!(Year::from_header("FY 2019"), Year::Year(2019));
        assert_eq!(Year::from_header("Mar-2021"), Year::Year(2021));
    }

    #[test]
    fn test_from_header_label() {
        assert_eq!(Year::from_header("TTM"), Year::Label("TTM".into()));
        assert_eq!(
            Year::from_header("2014-2015"),
            Year::Label("2014-2015".into())
        );
        // 年として不自然な数値はラベル
        assert_eq!(Year::from_header("42"), Year::Label("42".into()));
        assert_eq!(Year::from_header("2014.5"), Year::Label("2014.5".into()));
        assert_eq!(Year::from_header(" 12014 "), Year::Label("12014".into()));
    }

    #[test]
    fn test_from_cell() {
        assert_eq!(Year::from_cell(&Cell::Number(2016.0)), Year::Year(2016));
        assert_eq!(Year::from_cell(&Cell::Text("FY2017".into())), Year::Year(2017));
        assert_eq!(Year::from_cell(&Cell::Empty), Year::Label(String::new()));
        assert_eq!(Year::from_cell(&Cell::Number(2014.5)), Year::Label("2014.5".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Year::Year(2014).to_string(), "2014");
        assert_eq!(Year::Label("TTM".into()).to_string(), "TTM");
    }
}
