//! Per-field scraping for responses that contain no parseable JSON.
//!
//! Every extractor is a pure function returning `None` when nothing matched.
//! Pattern lists are tried in priority order and the first pattern that matches wins.

use std::sync::LazyLock;

use regex::Regex;
use rust_metagen_types::metadata::MetadataRecord;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("heuristic pattern is valid")
}

static TITLE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // `Title: ...` up to the end of the line.
        compile(r"(?im)title:[ \t]*(.*?)$"),
        // `"title": "..."`
        compile(r#"(?i)"title":\s*"(.*?)""#),
        // anything loosely shaped like `title ... value`.
        compile(r#"(?i)title.*?["\s:]+([^"\n]+)["\s]"#),
    ]
});

static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?is)description:\s*(.*?)(?:\n\s*\n|\n\s*keywords|\s*$)")
});

static KEYWORD_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        compile(r"(?is)keywords:\s*(.*?)(?:\n\s*\n|\s*$)"),
        compile(r#"(?is)"keywords":\s*\[(.*?)\]"#),
        compile(r#"(?is)keywords.*?["\s:]+([^"\n]+)["\s]"#),
    ]
});

static QUOTED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r#""([^"]+)""#));

/// 逐字段提取；未命中的字段为空。
#[must_use]
pub fn scrape(text: &str) -> MetadataRecord {
    MetadataRecord {
        title: extract_title(text).unwrap_or_default(),
        description: extract_description(text).unwrap_or_default(),
        keywords: extract_keywords(text).unwrap_or_default(),
    }
}

/// 提取标题。
#[must_use]
pub fn extract_title(text: &str) -> Option<String> {
    first_capture(TITLE_PATTERNS.as_slice(), text).map(|title| title.trim().to_string())
}

/// 提取描述：`Description:` 之后直到空行、`Keywords` 行或文本结尾。
#[must_use]
pub fn extract_description(text: &str) -> Option<String> {
    DESCRIPTION_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|description| description.as_str().trim().to_string())
}

/// 提取关键词并拆分。
#[must_use]
pub fn extract_keywords(text: &str) -> Option<Vec<String>> {
    first_capture(KEYWORD_PATTERNS.as_slice(), text).map(split_keywords)
}

/// 拆分原始关键词文本。
///
/// 含逗号时按逗号拆分，并去掉每项两端的空白与引号；否则含双引号时取所有引号内的子串；
/// 否则按空白拆分。拆分产生的空项会被丢弃。
#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.contains(',') {
        raw.split(',')
            .map(|item| item.trim().trim_matches(['"', '\'']).trim())
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    } else if raw.contains('"') {
        QUOTED_ITEM
            .captures_iter(raw)
            .filter_map(|caps| caps.get(1))
            .map(|item| item.as_str().to_string())
            .collect()
    } else {
        raw.split_whitespace().map(ToString::to_string).collect()
    }
}

fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|capture| capture.as_str())
    })
}
