use clap::{Args, Parser, Subcommand};
use qr_studio_common::{EcLevel, Language, Theme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qr-studio")]
#[command(about = "QRコード読み取り・作成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像ファイル/フォルダからQRコードを読み取る
    Read {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// QRコードを作成して保存
    Generate {
        /// エンコードするテキスト
        #[arg(required = true)]
        text: String,

        /// 出力ファイル（デフォルト: qrcode.png / qrcode.svg）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (png/svg)
        #[arg(short, long, default_value = "png")]
        format: OutputFormat,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// 作成したQRコードをその場で読み取って検証
    Verify {
        /// エンコードするテキスト
        #[arg(required = true)]
        text: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// 対話モード（タブ切替・言語/テーマ切替・リセット）
    Interactive,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 表示言語 (en/jp)
        #[arg(long)]
        lang: Option<Language>,

        /// テーマ (light/dark)
        #[arg(long)]
        theme: Option<Theme>,

        /// デフォルトサイズ(px)
        #[arg(long)]
        size: Option<u32>,

        /// デフォルト余白（モジュール数）
        #[arg(long)]
        margin: Option<u32>,

        /// デフォルト誤り訂正レベル (l/m/q/h)
        #[arg(long)]
        ec: Option<EcLevel>,
    },
}

/// 生成時の見た目オプション（省略時は設定値）
#[derive(Args, Clone, Debug, Default)]
pub struct StyleArgs {
    /// 画像サイズ(px)
    #[arg(short, long)]
    pub size: Option<u32>,

    /// 余白（モジュール数）
    #[arg(short, long)]
    pub margin: Option<u32>,

    /// 誤り訂正レベル (l/m/q/h)
    #[arg(short, long)]
    pub ec: Option<EcLevel>,

    /// 前景色 (#rrggbb)
    #[arg(long, default_value = "#000000")]
    pub dark: String,

    /// 背景色 (#rrggbb)
    #[arg(long, default_value = "#ffffff")]
    pub light: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(format!("Unknown format: {}. Use png or svg", s)),
        }
    }
}
