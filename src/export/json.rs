//! JSONレポート出力

use crate::error::Result;
use forensic_dash_common::Dashboard;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// レポート全体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: String,
    pub source: String,
    pub dashboards: Vec<Dashboard>,
}

impl Report {
    pub fn new(dashboards: &[Dashboard], source: &Path) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            source: source.display().to_string(),
            dashboards: dashboards.to_vec(),
        }
    }
}

pub fn write_report(dashboards: &[Dashboard], source: &Path, output_path: &Path) -> Result<()> {
    let report = Report::new(dashboards, source);
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

pub fn read_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
