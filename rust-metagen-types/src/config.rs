use serde::{Deserialize, Serialize};

/// 元数据请求使用的固定采样温度。
pub const METADATA_TEMPERATURE: f32 = 0.4;
/// 元数据请求使用的固定 top-p。
pub const METADATA_TOP_P: f32 = 0.95;
/// 元数据请求使用的固定 top-k。
pub const METADATA_TOP_K: f32 = 40.0;

/// 生成配置。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<f32>,
}

impl GenerationConfig {
    /// 元数据生成的固定参数（temperature 0.4, top-p 0.95, top-k 40）。
    #[must_use]
    pub const fn metadata_defaults() -> Self {
        Self {
            temperature: Some(METADATA_TEMPERATURE),
            top_p: Some(METADATA_TOP_P),
            top_k: Some(METADATA_TOP_K),
        }
    }
}
