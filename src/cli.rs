use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-ai")]
#[command(about = "画像からAI生成プロンプトを逆生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析して生成プロンプトを逆生成
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONファイルに保存
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 整形表示の代わりにJSONを標準出力へ
        #[arg(long)]
        json: bool,
    },

    /// 組み込みのプロンプトアーキタイプを表示
    Gallery,

    /// 設定の表示・変更
    Config {
        /// APIキーを設定（値を省略すると対話入力）
        #[arg(long, num_args = 0..=1)]
        set_api_key: Option<Option<String>>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
