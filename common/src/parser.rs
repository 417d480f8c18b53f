//! Geminiレスポンスパーサー
//!
//! セクション区切りのフリーテキストをAnalysisResultへ変換する。
//! モデル出力のフォーマット揺れ（空行・セクション順の入れ替わり・
//! セクション欠落）を許容し、決してエラーにしない

use crate::types::AnalysisResult;

/// セクションマーカー（行頭の完全一致プレフィクス）
const IMAGE_TYPE_MARKER: &str = "IMAGE TYPE:";
const PROMPT_MARKER: &str = "PROMPT:";
const STYLE_TAGS_MARKER: &str = "STYLE TAGS:";
const NEGATIVE_PROMPT_MARKER: &str = "NEGATIVE PROMPT:";
const GUIDE_MARKER: &str = "USER REPLACEMENT GUIDE:";

/// 現在読み取り中のセクション
#[derive(Clone, Copy)]
enum Section {
    None,
    ImageType,
    Prompt,
    StyleTags,
    NegativePrompt,
    Guide,
}

/// Geminiレスポンステキストをパース
///
/// 行単位でマーカーを検出してカーソルを切り替え、
/// マーカー以外の行を現在のセクションに蓄積する。
/// マーカー行自体は内容に含めない。
///
/// 失敗しない: マーカーが見つからないセクションは空文字列になり、
/// 最初のマーカーより前の行は捨てられる。
///
/// # Arguments
/// * `text` - Geminiのレスポンステキスト
///
/// # Examples
/// ```
/// use prompt_ai_common::parse_analysis_response;
///
/// let result = parse_analysis_response("IMAGE TYPE:\nPortrait\n\nPROMPT:\nA cat\n");
/// assert_eq!(result.image_type, "Portrait");
/// assert_eq!(result.prompt, "A cat");
/// ```
pub fn parse_analysis_response(text: &str) -> AnalysisResult {
    let mut image_type = String::new();
    let mut prompt = String::new();
    let mut style_tags = String::new();
    let mut negative_prompt = String::new();
    let mut user_replacement_guide = String::new();

    let mut current = Section::None;

    for line in text.split('\n') {
        if line.starts_with(IMAGE_TYPE_MARKER) {
            current = Section::ImageType;
        } else if line.starts_with(PROMPT_MARKER) {
            current = Section::Prompt;
        } else if line.starts_with(STYLE_TAGS_MARKER) {
            current = Section::StyleTags;
        } else if line.starts_with(NEGATIVE_PROMPT_MARKER) {
            current = Section::NegativePrompt;
        } else if line.starts_with(GUIDE_MARKER) {
            current = Section::Guide;
        } else if line.trim() == "---" || line.trim().is_empty() {
            continue;
        } else {
            let target = match current {
                // マーカー未検出の間は行を捨てる
                Section::None => continue,
                Section::ImageType => &mut image_type,
                Section::Prompt => &mut prompt,
                Section::StyleTags => &mut style_tags,
                Section::NegativePrompt => &mut negative_prompt,
                Section::Guide => &mut user_replacement_guide,
            };
            target.push_str(line.trim());
            target.push(' ');
        }
    }

    AnalysisResult {
        image_type: image_type.trim().to_string(),
        prompt: prompt.trim().to_string(),
        style_tags: style_tags.trim().to_string(),
        negative_prompt: negative_prompt.trim().to_string(),
        user_replacement_guide: user_replacement_guide.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // 基本ケース
    // =============================================

    #[test]
    fn test_parse_empty_input() {
        let result = parse_analysis_response("");
        assert_eq!(result.image_type, "");
        assert_eq!(result.prompt, "");
        assert_eq!(result.style_tags, "");
        assert_eq!(result.negative_prompt, "");
        assert_eq!(result.user_replacement_guide, "");
    }

    #[test]
    fn test_parse_canonical_order() {
        let text = "IMAGE TYPE:\nPortrait\n\nPROMPT:\nA cinematic portrait\n\nSTYLE TAGS:\ncinematic, 8k\n\nNEGATIVE PROMPT:\nblurry, low quality\n\nUSER REPLACEMENT GUIDE:\nReplace the placeholder\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "Portrait");
        assert_eq!(result.prompt, "A cinematic portrait");
        assert_eq!(result.style_tags, "cinematic, 8k");
        assert_eq!(result.negative_prompt, "blurry, low quality");
        assert_eq!(result.user_replacement_guide, "Replace the placeholder");
    }

    #[test]
    fn test_parse_reordered_sections() {
        // セクションの出現順はフィールドの対応に影響しない
        let text = "NEGATIVE PROMPT:\nblurry\n\nIMAGE TYPE:\nLandscape\n\nUSER REPLACEMENT GUIDE:\nnone\n\nPROMPT:\nA valley\n\nSTYLE TAGS:\nmoody\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "Landscape");
        assert_eq!(result.prompt, "A valley");
        assert_eq!(result.style_tags, "moody");
        assert_eq!(result.negative_prompt, "blurry");
        assert_eq!(result.user_replacement_guide, "none");
    }

    #[test]
    fn test_parse_multiline_joined_with_spaces() {
        let text = "PROMPT:\nA\nB";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "A B");
    }

    // =============================================
    // 区切り行・無視される行
    // =============================================

    #[test]
    fn test_parse_separator_lines_ignored() {
        let text = "---\nIMAGE TYPE:\nPortrait\n---\n\n   \nPROMPT:\nA cat\n---\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "Portrait");
        assert_eq!(result.prompt, "A cat");
        assert!(!result.image_type.contains("---"));
        assert!(!result.prompt.contains("---"));
    }

    #[test]
    fn test_parse_lines_before_first_marker_dropped() {
        let text = "garbage\nPROMPT:\nX";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "X");
        assert_eq!(result.image_type, "");
        assert_eq!(result.style_tags, "");
        assert_eq!(result.negative_prompt, "");
        assert_eq!(result.user_replacement_guide, "");
    }

    #[test]
    fn test_parse_only_unrecognized_lines() {
        let text = "Sure, here is the analysis you asked for.\nHope this helps!";

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "");
        assert_eq!(result.prompt, "");
        assert_eq!(result.style_tags, "");
        assert_eq!(result.negative_prompt, "");
        assert_eq!(result.user_replacement_guide, "");
    }

    // =============================================
    // エッジケース
    // =============================================

    #[test]
    fn test_parse_marker_without_content() {
        let text = "IMAGE TYPE:\nPROMPT:\nA cat\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "");
        assert_eq!(result.prompt, "A cat");
    }

    #[test]
    fn test_parse_marker_line_inline_content_dropped() {
        // マーカー行はカーソル切り替えのみで、同一行の内容は含めない
        let text = "PROMPT: inline text\nX\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "X");
    }

    #[test]
    fn test_parse_duplicate_marker_appends() {
        // 同じマーカーが再出現してもアキュムレータはリセットされず、追記になる
        let text = "PROMPT:\nfirst\nSTYLE TAGS:\ntags\nPROMPT:\nsecond\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "first second");
        assert_eq!(result.style_tags, "tags");
    }

    #[test]
    fn test_parse_marker_case_sensitive() {
        // 大文字小文字が違う見出しはマーカーとして認識されない
        let text = "Prompt:\nX\n";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "");
        assert_eq!(result.image_type, "");
    }

    #[test]
    fn test_parse_content_lines_trimmed() {
        let text = "PROMPT:\n   padded content   \n";

        let result = parse_analysis_response(text);
        assert_eq!(result.prompt, "padded content");
    }

    // =============================================
    // エンドツーエンドフィクスチャ
    // =============================================

    #[test]
    fn test_parse_full_gemini_reply_fixture() {
        let text = r#"---
IMAGE TYPE:
Cinematic Portrait

PROMPT:
A cinematic medium shot of [LEAD_CHARACTER_NAME] standing in a rain-soaked neon alley,
reflective puddles scattering magenta and teal light, shallow depth of field,
ultra-detailed skin texture, shot on ARRI Alexa, 8k hyper-realistic.

STYLE TAGS:
cinematic, neon noir, rain, 8k, film grain

NEGATIVE PROMPT:
blurry, low resolution, watermark, extra fingers, deformed hands

USER REPLACEMENT GUIDE:
Replace [LEAD_CHARACTER_NAME] with the name or description of your subject.
---"#;

        let result = parse_analysis_response(text);
        assert_eq!(result.image_type, "Cinematic Portrait");
        assert_eq!(
            result.prompt,
            "A cinematic medium shot of [LEAD_CHARACTER_NAME] standing in a rain-soaked neon alley, reflective puddles scattering magenta and teal light, shallow depth of field, ultra-detailed skin texture, shot on ARRI Alexa, 8k hyper-realistic."
        );
        assert_eq!(result.style_tags, "cinematic, neon noir, rain, 8k, film grain");
        assert_eq!(
            result.negative_prompt,
            "blurry, low resolution, watermark, extra fingers, deformed hands"
        );
        assert_eq!(
            result.user_replacement_guide,
            "Replace [LEAD_CHARACTER_NAME] with the name or description of your subject."
        );
    }
}
