use crate::error::{DashError, Result};
use forensic_dash_common::{LayoutMode, StructuredColumns};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ブックのパスを指定する環境変数
pub const WORKBOOK_ENV: &str = "FORENSIC_DASH_FILE";
/// どこにも指定がない場合のブック
pub const DEFAULT_WORKBOOK: &str = "data/financials.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workbook_path: Option<PathBuf>,
    pub layout: LayoutMode,
    /// ラベル形式で指標ラベルが入っている列（0 = A列）
    pub label_column: usize,
    pub company_column: String,
    pub year_column: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: None,
            layout: LayoutMode::Auto,
            label_column: 0,
            company_column: "Company".into(),
            year_column: "Year".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DashError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("forensic-dash").join("config.json"))
    }

    /// ブックのパスを決定
    ///
    /// 優先順: コマンドライン引数 > 環境変数 > 設定ファイル > デフォルト
    pub fn resolve_workbook_path(&self, cli_file: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_file {
            return path.to_path_buf();
        }

        if let Ok(path) = std::env::var(WORKBOOK_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        self.workbook_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKBOOK))
    }

    pub fn structured_columns(&self) -> StructuredColumns {
        StructuredColumns {
            company: self.company_column.clone(),
            year: self.year_column.clone(),
        }
    }

    pub fn set_workbook_path(&mut self, path: PathBuf) -> Result<()> {
        self.workbook_path = Some(path);
        self.save()
    }

    pub fn set_layout(&mut self, layout: LayoutMode) -> Result<()> {
        self.layout = layout;
        self.save()
    }
}
