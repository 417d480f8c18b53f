//! 解析結果の型定義
//!
//! CLIとUIで共有される型:
//! - AnalysisResult: 画像解析の最終出力（5セクション）

use serde::{Deserialize, Serialize};

/// AI解析結果
///
/// Geminiのレスポンステキストをパースした結果。
/// 欠けていたセクションは空文字列になる（フィールド自体は常に存在する）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    /// 画像種別（例: "Portrait"）
    pub image_type: String,

    /// 生成プロンプト本文
    pub prompt: String,

    /// スタイルタグ（区切り文字は固定しない）
    pub style_tags: String,

    /// ネガティブプロンプト
    pub negative_prompt: String,

    /// プレースホルダ置換ガイド
    pub user_replacement_guide: String,
}
