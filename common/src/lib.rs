//! Forensic Dashboard Common Library
//!
//! スプレッドシートの表から指標系列を取り出し、フォレンジック判定を行う。
//! ファイルI/Oは持たず、CLI側の読み込み結果（Workbook）を受け取る。

pub mod table;
pub mod year;
pub mod extract;
pub mod filter;
pub mod verdict;
pub mod catalog;
pub mod source;
pub mod dashboard;
pub mod error;
pub mod export;

pub use table::{Cell, Table, Workbook};
pub use year::Year;
pub use extract::{
    extract_by_exact_label, extract_by_label, extract_structured, is_placeholder_header,
    parse_numeric, year_axis, MetricSeries, SeriesPoint, StructuredColumns,
};
pub use filter::{distinct_companies, filter_by_company};
pub use verdict::{classify, ForensicAggregate, Verdict};
pub use catalog::{MetricSpec, Section};
pub use source::{LabeledWideSource, LayoutMode, Source, StructuredSource};
pub use dashboard::{build_all, build_dashboard, AxisColumn, Dashboard, DupontTable, SectionSeries, NO_VERDICT};
pub use error::{Error, Result};
