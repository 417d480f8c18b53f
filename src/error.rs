use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`prompt-ai config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("不正なData URL: {0}")]
    InvalidDataUrl(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("解析エンジンエラー: 画像からプロンプトを生成できませんでした")]
    EngineFailure,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromptAiError>;
