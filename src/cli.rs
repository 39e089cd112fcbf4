use clap::{Parser, Subcommand};
use forensic_dash_common::LayoutMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forensic-dash")]
#[command(about = "財務・フォレンジック指標ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 入力スプレッドシート（省略時: 環境変数 FORENSIC_DASH_FILE → 設定ファイル）
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// シート形式 (auto/structured/labeled)
    #[arg(long, global = true)]
    pub layout: Option<LayoutMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 会社一覧を表示
    Companies,

    /// 1社分のダッシュボードを表示
    Show {
        /// 会社名（省略時は一覧から選択）
        #[arg(short, long)]
        company: Option<String>,
    },

    /// 会社を選んで表示を繰り返す（ファイル変更は自動で再読み込み）
    Browse,

    /// 全社の判定一覧
    Verdicts,

    /// ダッシュボードをJSON/Excelに出力
    Export {
        /// 会社名（--all と排他）
        #[arg(short, long, conflicts_with = "all")]
        company: Option<String>,

        /// 全社を出力
        #[arg(long)]
        all: bool,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 入力スプレッドシートのパスを設定
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// シート形式を設定 (auto/structured/labeled)
        #[arg(long)]
        set_layout: Option<LayoutMode>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}
