//! Response normalization: turns free-form model output into a [`MetadataRecord`].
//!
//! Three stages are tried in order, each only when the previous one did not
//! produce a record:
//!
//! 1. the whole text parsed as a JSON object;
//! 2. the first fenced code block (optionally tagged `json`) parsed as a JSON object;
//! 3. independent per-field scraping (see [`heuristics`]).
//!
//! Normalization never fails. Fields that cannot be found are left empty.

use std::sync::LazyLock;

use regex::Regex;
use rust_metagen_types::metadata::MetadataRecord;
use serde_json::Value;

pub mod heuristics;

/// 记录由哪个阶段产出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeStage {
    /// 整段文本即为 JSON。
    Strict,
    /// 从围栏代码块中解析出 JSON。
    Fenced,
    /// 逐字段启发式提取。
    Heuristic,
}

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?i:json)?\s*(.*?)\s*```").expect("fenced block pattern is valid")
});

/// 规范化模型输出。
#[must_use]
pub fn normalize(raw_text: &str) -> MetadataRecord {
    normalize_with_stage(raw_text).0
}

/// 规范化模型输出，并返回产出记录的阶段。
#[must_use]
pub fn normalize_with_stage(raw_text: &str) -> (MetadataRecord, NormalizeStage) {
    if let Some(record) = parse_strict(raw_text) {
        trace_stage(NormalizeStage::Strict);
        return (record, NormalizeStage::Strict);
    }
    if let Some(record) = extract_fenced_block(raw_text).and_then(parse_strict) {
        trace_stage(NormalizeStage::Fenced);
        return (record, NormalizeStage::Fenced);
    }
    trace_stage(NormalizeStage::Heuristic);
    (heuristics::scrape(raw_text), NormalizeStage::Heuristic)
}

/// 将整段文本解析为 `{title, description, keywords}` JSON 对象。
///
/// 缺失或为 `null` 的键取空值；类型不符或不是对象时返回 `None`。
#[must_use]
pub fn parse_strict(text: &str) -> Option<MetadataRecord> {
    match serde_json::from_str(text).ok()? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        _ => None,
    }
}

/// 提取第一个围栏代码块的内容（去除首尾空白）。
#[must_use]
pub fn extract_fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str())
}

#[cfg(feature = "tracing")]
fn trace_stage(stage: NormalizeStage) {
    tracing::debug!(?stage, "normalized model response");
}

#[cfg(not(feature = "tracing"))]
const fn trace_stage(_stage: NormalizeStage) {}
