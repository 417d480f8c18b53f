//! プロンプトアーキタイプギャラリー
//!
//! galleryサブコマンドで表示する組み込みのプロンプト例

/// ギャラリーの1エントリ
#[derive(Debug, Clone, Copy)]
pub struct PromptArchetype {
    pub id: u32,
    pub title: &'static str,
    pub tag: &'static str,
    pub image_url: &'static str,
    pub prompt: &'static str,
}

/// 組み込みアーキタイプ一覧
pub const PROMPT_ARCHETYPES: &[PromptArchetype] = &[
    PromptArchetype {
        id: 1,
        title: "Cyberpunk Neural-Link",
        tag: "Trending",
        image_url: "https://images.unsplash.com/photo-1614728263952-84ea256f9679?auto=format&fit=crop&q=80&w=800",
        prompt: "A cinematic medium shot of an android with exposed translucent skull sections revealing glowing neural circuits, soft blue and pink neon reflections on high-gloss obsidian plating, dense cinematic smoke, ultra-detailed skin pores, shot on ARRI Alexa, 8k hyper-realistic.",
    },
    PromptArchetype {
        id: 2,
        title: "Organic Architecture",
        tag: "Concept",
        image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af9f23?auto=format&fit=crop&q=80&w=800",
        prompt: "An architectural masterpiece of a skyscraper made entirely of living emerald ivy and flowing white silk, towering over a futuristic city during a misty golden hour, ray-traced reflections, intricate organic patterns, Zaha Hadid style, ethereal lighting, high-contrast editorial photography.",
    },
    PromptArchetype {
        id: 3,
        title: "Vogue Kinetic Shot",
        tag: "Editorial",
        image_url: "https://images.unsplash.com/photo-1509631179647-0177331693ae?auto=format&fit=crop&q=80&w=800",
        prompt: "Dynamic fashion action shot of a model wearing a liquid-gold structured garment captured mid-motion, sharp shards of light, high-speed photography, minimalist grey studio background, intense focus on garment texture, high-fashion color grading, film grain, Vogue aesthetic.",
    },
    PromptArchetype {
        id: 4,
        title: "Deep Sea Bio-Mech",
        tag: "Portrait",
        image_url: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&q=80&w=800",
        prompt: "A close-up portrait of a deep-sea diver in a mechanical suit integrated with bioluminescent jellyfish parts, bubbles reflecting shimmering teal light, underwater atmospheric perspective, realistic water physics, masterpiece quality, Unreal Engine 5 render style.",
    },
];
