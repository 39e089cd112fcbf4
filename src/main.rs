use clap::Parser;
use forensic_dash::{cli, config, error, export, render, selector, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use session::Session;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,forensic_dash=debug,forensic_dash_common=debug"
    } else {
        "warn,forensic_dash=info"
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("✖ {}", e);
        if e.is_load_error() {
            eprintln!("  入力ファイルを確認してください（--file / FORENSIC_DASH_FILE / config --set-file）");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Companies => {
            let mut session = Session::from_config(&config, cli.file.as_deref(), cli.layout);
            let companies = session.companies()?;
            println!("📋 会社一覧 ({}社) - {}\n", companies.len(), session.path().display());
            for company in companies {
                println!("  {}", company);
            }
        }

        Commands::Show { company } => {
            let mut session = Session::from_config(&config, cli.file.as_deref(), cli.layout);
            let company = match company {
                Some(c) => c,
                None => {
                    let companies = session.companies()?;
                    match selector::select_company(&companies, None)? {
                        Some(c) => c,
                        None => return Ok(()),
                    }
                }
            };
            let dashboard = session.dashboard(&company)?;
            print!("{}", render::render_dashboard(&dashboard));
        }

        Commands::Browse => {
            let mut session = Session::from_config(&config, cli.file.as_deref(), cli.layout);
            let mut last: Option<String> = None;

            // 選択のたびに読み込みから判定までをやり直す（ブックはキャッシュ経由）
            loop {
                let companies = session.companies()?;
                let Some(company) = selector::select_company(&companies, last.as_deref())? else {
                    break;
                };
                let dashboard = session.dashboard(&company)?;
                println!();
                print!("{}", render::render_dashboard(&dashboard));
                println!();
                last = Some(company);
            }
        }

        Commands::Verdicts => {
            let mut session = Session::from_config(&config, cli.file.as_deref(), cli.layout);
            let dashboards = session.dashboards()?;
            print!("{}", render::render_verdict_summary(&dashboards));
        }

        Commands::Export { company, all, format, output } => {
            println!("📄 forensic-dash - エクスポート\n");

            let mut session = Session::from_config(&config, cli.file.as_deref(), cli.layout);
            let dashboards = match (company, all) {
                (Some(c), _) => vec![session.dashboard(&c)?],
                (None, true) => session.dashboards()?,
                (None, false) => {
                    let companies = session.companies()?;
                    match selector::select_company(&companies, None)? {
                        Some(c) => vec![session.dashboard(&c)?],
                        None => return Ok(()),
                    }
                }
            };

            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let written = export::export_dashboards(&dashboards, &format, &output_dir, session.path())?;
            for path in written {
                println!("✔ 出力: {}", path.display());
            }

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_file, set_layout, show } => {
            let mut config = config;

            if let Some(path) = set_file {
                config.set_workbook_path(path)?;
                println!("✔ 入力ファイルを設定しました");
            }

            if let Some(layout) = set_layout {
                config.set_layout(layout)?;
                println!("✔ シート形式を設定しました: {}", layout);
            }

            if show {
                println!("設定:");
                println!("  入力ファイル: {}", config.resolve_workbook_path(cli.file.as_deref()).display());
                println!("  シート形式: {}", config.layout);
                println!("  ラベル列: {}", config.label_column);
                println!("  会社列 / 年度列: {} / {}", config.company_column, config.year_column);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
