//! Curated list of suggested search keywords

const POPULAR_KEYWORDS: &[&str] = &[
    "入試",
    "進路",
    "学校行事",
    "英検",
    "合唱祭",
    "文化祭",
    "体育祭",
    "日本大学",
    "付属推薦",
    "研修旅行",
    "語学研修",
    "オーストラリア",
    "中学1年",
    "中学2年",
    "中学3年",
    "高校1年",
    "高校2年",
    "高校3年",
    "保護者会",
    "基礎学力",
    "生活習慣",
    "6年間",
    "一貫教育",
    "両国駅",
    "墨田区",
    "通学時間",
    "駅近",
    "アクセス",
    "青木校長",
    "先生",
    "生徒",
    "教育",
    "成長",
    "将来",
];

/// Suggested keywords, most prominent first. Fixed; not derived from data.
pub fn popular_keywords() -> &'static [&'static str] {
    POPULAR_KEYWORDS
}

/// The first `limit` suggested keywords
pub fn top_keywords(limit: usize) -> &'static [&'static str] {
    &POPULAR_KEYWORDS[..limit.min(POPULAR_KEYWORDS.len())]
}
