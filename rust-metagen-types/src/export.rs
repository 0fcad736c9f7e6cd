use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::metadata::MetadataRecord;

/// 未提供源文件路径时写入的占位值。
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// 导出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// 带缩进的 JSON 文档。
    Json,
    /// 扁平文本文档。
    Text,
}

impl ExportFormat {
    /// 按扩展名选择格式：`.json` 为 JSON，其余为文本。
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_json = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// 导出文档：元数据 + 生成时间 + 源文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub generated_at: String,
    pub source_file: String,
}

impl ExportDocument {
    /// 由记录构建导出文档。关键词去除首尾空白并丢弃空项。
    pub fn new(
        record: &MetadataRecord,
        generated_at: impl Into<String>,
        source_file: Option<&Path>,
    ) -> Self {
        Self {
            title: record.title.trim().to_string(),
            description: record.description.trim().to_string(),
            keywords: record
                .keywords
                .iter()
                .map(|keyword| keyword.trim())
                .filter(|keyword| !keyword.is_empty())
                .map(ToString::to_string)
                .collect(),
            generated_at: generated_at.into(),
            source_file: source_file.map_or_else(
                || UNKNOWN_SOURCE.to_string(),
                |path| path.display().to_string(),
            ),
        }
    }
}
