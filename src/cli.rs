use abbr_lookup_common::{Collation, ExportFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "abbr")]
#[command(about = "略語・正式名称・中文訳の検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// データソース (builtin / custom / URL / ファイルパス)
    #[arg(long, default_value = "builtin", global = true)]
    pub source: SourceArg,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// キーワードで検索し、頭文字ごとに表示
    Search {
        /// 検索キーワード（省略時は全件）
        keyword: Option<String>,

        /// 検索履歴に記録しない
        #[arg(long)]
        no_history: bool,

        /// ジャンプ用インデックスを表示
        #[arg(short, long)]
        index: bool,
    },

    /// 項目を追加（未指定の項目は対話入力）
    Add {
        /// 略語
        #[arg(short, long)]
        abbr: Option<String>,

        /// 正式名称
        #[arg(short, long)]
        full: Option<String>,

        /// 中文訳
        #[arg(short, long)]
        zh: Option<String>,
    },

    /// 結合ビューを書き出し
    Export {
        /// 出力形式 (csv/json/excel/all)
        #[arg(short, long, default_value = "csv")]
        format: ExportTarget,

        /// 出力ファイル/ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ジャンプ用のバケット名一覧
    Index,

    /// 検索履歴を表示/削除
    History {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,
    },

    /// ローカル追加項目を表示/削除
    Local {
        /// ローカル追加項目を削除
        #[arg(long)]
        clear: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 組み込みソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// 並び順を設定 (ordinal/case-insensitive)
        #[arg(long)]
        set_collation: Option<Collation>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--source` の指定
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SourceArg {
    /// 設定ファイルの組み込みソース
    #[default]
    Builtin,
    /// URLを対話入力
    Custom,
    /// URLまたはファイルパスを直接指定
    Location(String),
}

impl std::str::FromStr for SourceArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err("Empty source. Use builtin, custom, or a URL".into()),
            "builtin" => Ok(SourceArg::Builtin),
            "custom" => Ok(SourceArg::Custom),
            _ => Ok(SourceArg::Location(trimmed.to_string())),
        }
    }
}

/// `--format` の指定
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportTarget {
    One(ExportFormat),
    All,
}

impl ExportTarget {
    pub fn formats(&self) -> Vec<ExportFormat> {
        match self {
            ExportTarget::One(format) => vec![*format],
            ExportTarget::All => ExportFormat::all(),
        }
    }
}

impl std::str::FromStr for ExportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("both") {
            return Ok(ExportTarget::All);
        }
        s.parse::<ExportFormat>().map(ExportTarget::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_source_arg() {
        assert_eq!("builtin".parse::<SourceArg>().unwrap(), SourceArg::Builtin);
        assert_eq!("Custom".parse::<SourceArg>().unwrap(), SourceArg::Custom);
        assert_eq!(
            "https://example.com/a.json".parse::<SourceArg>().unwrap(),
            SourceArg::Location("https://example.com/a.json".into())
        );
        assert!(" ".parse::<SourceArg>().is_err());
    }

    #[test]
    fn test_export_target() {
        assert_eq!("all".parse::<ExportTarget>().unwrap(), ExportTarget::All);
        assert_eq!(
            "json".parse::<ExportTarget>().unwrap(),
            ExportTarget::One(ExportFormat::Json)
        );
        assert!("pdf".parse::<ExportTarget>().is_err());
        assert_eq!(ExportTarget::All.formats(), ExportFormat::all());
    }

    #[test]
    fn test_parse_search_command() {
        let cli = Cli::try_parse_from(["abbr", "search", "tcp", "--no-history"]).unwrap();
        match cli.command {
            Commands::Search { keyword, no_history, index } => {
                assert_eq!(keyword.as_deref(), Some("tcp"));
                assert!(no_history);
                assert!(!index);
            }
            _ => panic!("expected search"),
        }
        assert_eq!(cli.source, SourceArg::Builtin);
    }
}
