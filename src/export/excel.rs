//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す

use crate::error::{DashError, Result};
use forensic_dash_common::export::excel_core::generate_dashboard_buffer;
use forensic_dash_common::Dashboard;
use std::path::Path;

pub fn generate_excel(dashboards: &[Dashboard], output_path: &Path) -> Result<()> {
    let buffer = generate_dashboard_buffer(dashboards).map_err(DashError::ExcelGeneration)?;

    std::fs::write(output_path, buffer)
        .map_err(|e| DashError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    Ok(())
}
