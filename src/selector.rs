//! 会社の対話式選択モジュール
//!
//! 自由入力ではなく、シートに実在する会社名の一覧から選ばせる。

use crate::error::{DashError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

/// 一覧から会社を選択（Esc / q で None）
pub fn select_company(companies: &[String], default: Option<&str>) -> Result<Option<String>> {
    if companies.is_empty() {
        return Ok(None);
    }

    let default_idx = default
        .and_then(|d| companies.iter().position(|c| c == d))
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("会社を選択してください（Esc で終了）")
        .items(companies)
        .default(default_idx)
        .interact_opt()
        .map_err(|e| DashError::Prompt(e.to_string()))?;

    Ok(selection.map(|idx| companies[idx].clone()))
}
