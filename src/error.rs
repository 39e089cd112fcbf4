use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("スプレッドシートを読み込めません: {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("会社が見つかりません: {0}（`forensic-dash companies` で一覧を確認してください）")]
    UnknownCompany(String),

    #[error("会社が1社もありません: {0}")]
    NoCompanies(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] forensic_dash_common::Error),
}

impl DashError {
    /// 読み込み失敗（セッション継続不可）か
    pub fn is_load_error(&self) -> bool {
        matches!(self, DashError::Load { .. } | DashError::FileNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
