//! 対話セッション
//!
//! 読み込み → 取得戦略の決定 → 抽出 → 判定 を操作のたびに同期実行する。
//! ブックの読み込み結果だけはキャッシュ（WorkbookCache）を経由して使い回す。

use crate::config::Config;
use crate::error::{DashError, Result};
use crate::loader::WorkbookCache;
use forensic_dash_common::{build_all, build_dashboard, Dashboard, LayoutMode, Source, StructuredColumns};
use std::path::{Path, PathBuf};

pub struct Session {
    cache: WorkbookCache,
    path: PathBuf,
    layout: LayoutMode,
    columns: StructuredColumns,
    label_column: usize,
}

impl Session {
    pub fn new(path: PathBuf, layout: LayoutMode, columns: StructuredColumns, label_column: usize) -> Self {
        Self {
            cache: WorkbookCache::new(),
            path,
            layout,
            columns,
            label_column,
        }
    }

    /// 設定とコマンドライン指定からセッションを作る
    pub fn from_config(config: &Config, cli_file: Option<&Path>, layout_override: Option<LayoutMode>) -> Self {
        Self::new(
            config.resolve_workbook_path(cli_file),
            layout_override.unwrap_or(config.layout),
            config.structured_columns(),
            config.label_column,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cache(&self) -> &WorkbookCache {
        &self.cache
    }

    /// 会社の選択肢
    pub fn companies(&mut self) -> Result<Vec<String>> {
        let workbook = self.cache.get(&self.path)?;
        let source = Source::detect(&workbook, self.layout, self.columns.clone(), self.label_column)?;
        Ok(source.companies())
    }

    /// 1社分のダッシュボード（一覧にない会社はエラー）
    pub fn dashboard(&mut self, company: &str) -> Result<Dashboard> {
        let workbook = self.cache.get(&self.path)?;
        let source = Source::detect(&workbook, self.layout, self.columns.clone(), self.label_column)?;

        let companies = source.companies();
        let company = resolve_company(&companies, company)?;
        Ok(build_dashboard(&source, &company))
    }

    /// 全社分
    pub fn dashboards(&mut self) -> Result<Vec<Dashboard>> {
        let workbook = self.cache.get(&self.path)?;
        let source = Source::detect(&workbook, self.layout, self.columns.clone(), self.label_column)?;
        let dashboards = build_all(&source);
        if dashboards.is_empty() {
            return Err(DashError::NoCompanies(self.path.display().to_string()));
        }
        Ok(dashboards)
    }
}

/// 一覧にある会社名をそのまま返す（完全一致のみ）
pub fn resolve_company(companies: &[String], requested: &str) -> Result<String> {
    companies
        .iter()
        .find(|c| c.as_str() == requested)
        .cloned()
        .ok_or_else(|| DashError::UnknownCompany(requested.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_company_exact_only() {
        let companies = vec!["Acme".to_string(), "Beta Corp".to_string()];
        assert_eq!(resolve_company(&companies, "Beta Corp").unwrap(), "Beta Corp");
        assert!(matches!(
            resolve_company(&companies, "beta corp"),
            Err(DashError::UnknownCompany(_))
        ));
        assert!(resolve_company(&companies, "Acme ").is_err());
    }

    #[test]
    fn test_session_missing_file_is_load_error() {
        let mut session = Session::new(
            PathBuf::from("/nonexistent/book.xlsx"),
            LayoutMode::Auto,
            StructuredColumns::default(),
            0,
        );
        let err = session.companies().unwrap_err();
        assert!(err.is_load_error());
    }
}
