use clap::Parser;
use prompt_ai_common::{AnalysisResult, PROMPT_ARCHETYPES};
use prompt_ai_rust::{api, cli, config, error, loader};

use cli::{Cli, Commands};
use config::Config;
use error::{PromptAiError, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output, json } => {
            if !json {
                println!("🔍 prompt-ai-rust - 画像解析\n");
                println!("[1/3] 画像を読み込み中...");
            }

            let data_url = loader::load_image_as_data_url(&image)?;

            if !json {
                println!(
                    "✔ 読み込み完了: {} ({})\n",
                    image.display(),
                    api::extract_mime_type_from_data_url(&data_url)
                );
                println!("[2/3] AI解析中...");
            }

            let api_key = config.get_api_key()?;

            let result = match api::analyze_image(&api_key, &data_url).await {
                Ok(result) => result,
                Err(e) => {
                    // 失敗理由はverbose時のみ表示し、ユーザーには一律のメッセージを返す
                    if cli.verbose {
                        eprintln!("  原因: {}", e);
                    }
                    return Err(PromptAiError::EngineFailure);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("✔ 解析完了\n");
                println!("[3/3] 結果を表示\n");
                print_result(&result);
            }

            if let Some(output_path) = output {
                let content = serde_json::to_string_pretty(&result)?;
                std::fs::write(&output_path, content)?;
                if !json {
                    println!("\n✔ 結果を保存: {}", output_path.display());
                }
            }

            if !json {
                println!("\n✅ 解析完了");
            }
        }

        Commands::Gallery => {
            println!("🖼  prompt-ai-rust - プロンプトアーキタイプ\n");

            for archetype in PROMPT_ARCHETYPES {
                println!("[{}] {} ({})", archetype.id, archetype.title, archetype.tag);
                println!("  参考画像: {}", archetype.image_url);
                println!("  {}\n", archetype.prompt);
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                let key = match key {
                    Some(key) => key,
                    None => dialoguer::Password::new()
                        .with_prompt("Gemini APIキー")
                        .interact()
                        .map_err(|e| PromptAiError::Config(e.to_string()))?,
                };
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  APIキー: {}",
                    if config.api_key.is_some() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("── 画像種別 ──");
    println!("{}\n", result.image_type);
    println!("── プロンプト ──");
    println!("{}\n", result.prompt);
    println!("── スタイルタグ ──");
    println!("{}\n", result.style_tags);
    println!("── ネガティブプロンプト ──");
    println!("{}\n", result.negative_prompt);
    println!("── 置換ガイド ──");
    println!("{}", result.user_replacement_guide);
}
