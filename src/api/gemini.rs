//! Gemini API連携（画像→プロンプト逆生成）
//!
//! 1画像につき1回のgenerateContent呼び出しを行い、
//! レスポンステキストをパーサー(prompt_ai_common::parser)へ渡す。
//! リトライ・ストリーミング・タイムアウト指定は行わない

use crate::error::{PromptAiError, Result};
use prompt_ai_common::{
    parse_analysis_response, AnalysisResult, SYSTEM_INSTRUCTION, USER_INSTRUCTION,
};
use serde::{Deserialize, Serialize};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// 送信画像のMIMEタイプ（実際のフォーマットに関わらず固定）
const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// generationConfig.temperature（固定）
const TEMPERATURE: f32 = 0.7;

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// 最初のカンマより後のペイロード部分、カンマがない場合はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/png"）、抽出失敗時は"image/jpeg"
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// 画像を解析してプロンプトを逆生成
///
/// 固定のシステムインストラクションと画像を送信し、
/// レスポンステキストをパースしたAnalysisResultを返す。
/// textフィールドが欠けたレスポンスは空文字列として扱う（エラーにしない）
///
/// # Arguments
/// * `api_key` - Gemini APIキー
/// * `image_data` - Base64 Data URL（data:image/...;base64,...）
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース済みの解析結果
/// * `Err` - Data URLが不正、またはリモート呼び出しが失敗した場合
pub async fn analyze_image(api_key: &str, image_data: &str) -> Result<AnalysisResult> {
    analyze_image_at(GEMINI_API_URL, api_key, image_data).await
}

/// エンドポイント指定版（テストで差し替えるため分離）
async fn analyze_image_at(
    endpoint: &str,
    api_key: &str,
    image_data: &str,
) -> Result<AnalysisResult> {
    let base64_data = extract_base64_from_data_url(image_data)
        .ok_or_else(|| PromptAiError::InvalidDataUrl("base64セクションがありません".into()))?;

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: IMAGE_MIME_TYPE.to_string(),
                        data: base64_data.to_string(),
                    },
                },
                Part::Text {
                    text: USER_INSTRUCTION.to_string(),
                },
            ],
        }],
        system_instruction: Content {
            parts: vec![Part::Text {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
        },
    };

    let response_text = call_gemini_api(endpoint, api_key, &request).await?;

    Ok(parse_analysis_response(&response_text))
}

/// Gemini API呼び出し（共通処理）
async fn call_gemini_api(endpoint: &str, api_key: &str, request: &GeminiRequest) -> Result<String> {
    let url = format!("{}?key={}", endpoint, api_key);

    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| PromptAiError::ApiCall(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PromptAiError::ApiCall(format!("status {}: {}", status, body)));
    }

    let payload: GeminiResponse = response
        .json()
        .await
        .map_err(|e| PromptAiError::ApiCall(e.to_string()))?;

    Ok(payload
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .unwrap_or_default())
}
