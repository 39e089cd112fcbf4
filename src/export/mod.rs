pub mod json;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use forensic_dash_common::Dashboard;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 出力ファイル名の既定値（1社なら会社名、複数なら dashboard）
pub fn default_title(dashboards: &[Dashboard]) -> String {
    match dashboards {
        [single] => forensic_dash_common::export::excel_core::sanitize_sheet_name(&single.company),
        _ => "dashboard".to_string(),
    }
}

/// ダッシュボードを指定形式で書き出し、書き出したパスを返す
pub fn export_dashboards(
    dashboards: &[Dashboard],
    format: &ExportFormat,
    output: &Path,
    source: &Path,
) -> Result<Vec<PathBuf>> {
    let title = default_title(dashboards);

    if output.extension().is_none() && !output.exists() {
        std::fs::create_dir_all(output)?;
    }

    let written = match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, &title, "json");
            json::write_report(dashboards, source, &path)?;
            vec![path]
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, &title, "xlsx");
            excel::generate_excel(dashboards, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, &title);
            json::write_report(dashboards, source, &json_path)?;
            excel::generate_excel(dashboards, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::info!(path = %path.display(), companies = dashboards.len(), "レポート出力");
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_format() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            output_path_for_format(dir.path(), "Acme", "json"),
            dir.path().join("Acme.json")
        );
        let file = dir.path().join("report.xlsx");
        assert_eq!(output_path_for_format(&file, "Acme", "xlsx"), file);
    }

    #[test]
    fn test_output_paths_for_both_uses_stem() {
        let (json, excel) = output_paths_for_both(Path::new("/tmp/out/report.json"), "Acme");
        assert_eq!(json, PathBuf::from("/tmp/out/report.json"));
        assert_eq!(excel, PathBuf::from("/tmp/out/report.xlsx"));
    }
}
