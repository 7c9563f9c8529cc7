use abbr_lookup::{cli, commands, config, error, fetch, prompt, storage, terminal};
use abbr_lookup_common::{App, Record};
use clap::Parser;
use cli::{Cli, Commands, SourceArg};
use config::Config;
use error::Result;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use storage::FileStorage;
use terminal::TerminalRenderer;
use tracing_subscriber::EnvFilter;

type TerminalApp = App<FileStorage, TerminalRenderer>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let storage = FileStorage::open(&config.data_dir()?)?;

    match cli.command {
        Commands::Search { keyword, no_history, index } => {
            let keyword = keyword.unwrap_or_default();
            let mut app = new_app(&config, storage, TerminalRenderer::new(index));
            app.set_keyword(&keyword);
            let loaded = load_source(&mut app, &config, &cli.source).await?;
            commands::show_search(&mut app, &keyword, loaded, !no_history)?;
        }

        Commands::Add { abbr, full, zh } => {
            let record = Record::new(
                prompt::prompt_field(abbr, "略語 (abbr)")?,
                prompt::prompt_field(full, "正式名称 (full)")?,
                prompt::prompt_field(zh, "中文訳 (zh)")?,
            );

            let mut app = new_app(&config, storage, TerminalRenderer::quiet());
            app.add_local(record)?;
        }

        Commands::Export { format, output } => {
            let mut app = new_app(&config, storage, TerminalRenderer::quiet());
            load_source(&mut app, &config, &cli.source).await?;

            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let formats = format.formats();
            let paths = commands::export_to(&app, &formats, &output)?;
            for (format, path) in formats.iter().zip(&paths) {
                println!("✔ {} 出力: {}", format.extension().to_uppercase(), path.display());
            }
        }

        Commands::Index => {
            let mut app = new_app(&config, storage, TerminalRenderer::quiet());
            load_source(&mut app, &config, &cli.source).await?;
            println!("{}", app.view().index.join(" "));
        }

        Commands::History { clear } => {
            let mut app = new_app(&config, storage, TerminalRenderer::quiet());
            if clear {
                app.clear_history()?;
                println!("✔ 検索履歴を削除しました");
            } else if app.history().is_empty() {
                println!("検索履歴はありません");
            } else {
                for (i, keyword) in app.history().entries().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, keyword);
                }
            }
        }

        Commands::Local { clear } => {
            let mut app = new_app(&config, storage, TerminalRenderer::quiet());
            if clear {
                app.clear_local()?;
                println!("✔ ローカル追加項目を削除しました");
            } else if app.store().local().is_empty() {
                println!("ローカル追加項目はありません");
            } else {
                for record in app.store().local() {
                    println!("  {:<10} {}  {}", record.abbr, record.full, record.zh);
                }
            }
        }

        Commands::Config { set_source, set_collation, show } => {
            let mut config = config;

            if let Some(source) = set_source {
                config.set_source(source)?;
                println!("✔ 組み込みソースを設定しました");
            }

            if let Some(collation) = set_collation {
                config.set_collation(collation)?;
                println!("✔ 並び順を設定しました");
            }

            if show {
                println!("設定:");
                println!("  ソース: {}", config.source);
                println!("  並び順: {}", config.collation);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  既定タイトル: {}", config.title_fallback());
                println!("  保存先: {}", config.data_dir()?.display());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn new_app(config: &Config, storage: FileStorage, renderer: TerminalRenderer) -> TerminalApp {
    App::new(
        storage,
        renderer,
        Box::new(config.collation),
        &config.source,
    )
    .with_default_title(config.title_fallback())
}

/// 選択されたソースを読み込む
///
/// 失敗は通知のみで致命的ではなく、直前の表示内容で処理を続ける。
/// 読み込めた場合に true。
async fn load_source(app: &mut TerminalApp, config: &Config, source: &SourceArg) -> Result<bool> {
    let location = match source {
        SourceArg::Builtin => config.source.clone(),
        SourceArg::Location(location) => location.clone(),
        SourceArg::Custom => match prompt::prompt_custom_url()? {
            Some(url) => url,
            None => {
                let restored = app.cancel_load();
                tracing::debug!(selection = %restored, "URL入力が取り消されました");
                return Ok(false);
            }
        },
    };

    let ticket = app.begin_load(&location);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("読み込み中: {}", location));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = fetch::fetch_dataset(
        &location,
        Duration::from_secs(config.timeout_seconds),
        config.title_fallback(),
    )
    .await;
    spinner.finish_and_clear();

    Ok(app.finish_load(ticket, result))
}
