//! 画像ファイル読み込み
//!
//! 画像ファイルをData URL形式（data:<mime>;base64,<payload>）へ変換する。
//! MIMEタイプは拡張子ではなくマジックバイトから判定する

use crate::error::{PromptAiError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// 画像ファイルを読み込みData URLへ変換
///
/// # Arguments
/// * `path` - 画像ファイルのパス
///
/// # Returns
/// * `Ok(String)` - "data:image/png;base64,..." 形式のData URL
/// * `Err` - ファイルが存在しない、読み込めない、画像として認識できない場合
pub fn load_image_as_data_url(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PromptAiError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes).map_err(|_| {
        PromptAiError::ImageLoad(format!("画像形式を判定できません: {}", path.display()))
    })?;

    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(&bytes)
    ))
}
