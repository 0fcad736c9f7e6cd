use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::Content;

/// 生成内容响应。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
}

impl GenerateContentResponse {
    /// 提取第一个候选的文本。
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(Content::first_text)
    }
}

/// 响应候选。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// 非 2xx 响应的错误体：`{"error": {...}}`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorStatus,
}

/// 错误详情。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiErrorStatus {
    /// 非空的 details（空数组、空对象、null 视为无）。
    #[must_use]
    pub fn non_empty_details(&self) -> Option<&Value> {
        self.details.as_ref().filter(|details| match details {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::String(text) => !text.is_empty(),
            _ => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_reads_first_candidate_only() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "first"}]}},
                {"content": {"role": "model", "parts": [{"text": "second"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.text(), None);

        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(blocked.text(), None);
    }

    #[test]
    fn error_details_are_filtered_when_empty() {
        let body: ApiErrorResponse = serde_json::from_value(json!({
            "error": {"code": 429, "message": "quota exceeded", "details": []}
        }))
        .unwrap();
        assert_eq!(body.error.message.as_deref(), Some("quota exceeded"));
        assert!(body.error.non_empty_details().is_none());
    }
}
