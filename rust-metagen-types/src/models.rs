use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::content::Content;
use crate::media::MediaKind;

/// `generateContent` 请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// 构建元数据请求：提示词 + 内联文件数据 + 固定生成参数。
    pub fn for_media(data: Vec<u8>, kind: MediaKind, mime_type: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_with_media(kind.prompt(), data, mime_type)],
            generation_config: Some(GenerationConfig::metadata_defaults()),
        }
    }
}

/// 元数据生成配置（调用级别）。
#[derive(Debug, Clone, Default)]
pub struct GenerateMetadataConfig {
    /// 显式指定声明的 MIME 类型，优先级最高。
    pub mime_type: Option<String>,
    /// 按文件扩展名猜测 MIME 类型（仅在读取文件路径时生效）。
    ///
    /// 默认关闭，此时始终声明类别的默认 MIME 类型。
    pub guess_mime_type: bool,
}
