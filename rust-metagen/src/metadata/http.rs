use rust_metagen_types::response::{ApiErrorResponse, GenerateContentResponse};

use crate::client::ClientInner;
use crate::error::{Error, Result};

pub(super) fn build_generate_url(inner: &ClientInner) -> String {
    let model = inner.config.model.trim_start_matches("models/");
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    format!("{base}{version}/models/{model}:generateContent")
}

pub(super) async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Error::ApiError {
        status,
        message: api_error_message(status, &body),
    }
}

/// `error.message`（附加非空 details），否则 `HTTP Error: <status>`。
pub(super) fn api_error_message(status: u16, body: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<ApiErrorResponse>(body) else {
        return format!("HTTP Error: {status}");
    };
    let error = envelope.error;
    let Some(message) = error.message.as_deref().filter(|m| !m.is_empty()) else {
        return format!("HTTP Error: {status}");
    };
    match error.non_empty_details() {
        Some(details) => format!("{message}\nDetails: {details}"),
        None => message.to_string(),
    }
}

/// 取第一个候选的第一个文本片段。
pub(super) fn extract_candidate_text(body: &str) -> Result<String> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|err| Error::Parse {
            message: err.to_string(),
        })?;
    response
        .text()
        .filter(|text| !text.trim().is_empty())
        .map(ToString::to_string)
        .ok_or(Error::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_client_inner_with_base, test_client_inner_with_model};

    #[test]
    fn generate_url_uses_model_and_version() {
        let inner = test_client_inner_with_base("http://localhost:9000/");
        assert_eq!(
            build_generate_url(&inner),
            "http://localhost:9000/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn generate_url_accepts_prefixed_model() {
        let inner = test_client_inner_with_model("http://localhost:9000/", "models/gemini-pro");
        assert_eq!(
            build_generate_url(&inner),
            "http://localhost:9000/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn error_message_from_envelope() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded"}}"#;
        assert_eq!(api_error_message(429, body), "quota exceeded");
    }

    #[test]
    fn error_message_appends_details() {
        let body = r#"{"error":{"message":"bad","details":[{"reason":"X"}]}}"#;
        assert_eq!(
            api_error_message(400, body),
            "bad\nDetails: [{\"reason\":\"X\"}]"
        );
    }

    #[test]
    fn error_message_skips_empty_details() {
        let body = r#"{"error":{"message":"bad","details":[]}}"#;
        assert_eq!(api_error_message(400, body), "bad");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(api_error_message(500, "<html>oops</html>"), "HTTP Error: 500");
        assert_eq!(api_error_message(403, r#"{"error":{}}"#), "HTTP Error: 403");
        assert_eq!(api_error_message(502, ""), "HTTP Error: 502");
    }

    #[test]
    fn candidate_text_is_first_text_part() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"one"},{"text":"two"}]}}]}"#;
        assert_eq!(extract_candidate_text(body).unwrap(), "one");
    }

    #[test]
    fn missing_text_is_empty_response() {
        for body in [
            r#"{"candidates":[]}"#,
            "{}",
            r#"{"candidates":[{"finishReason":"SAFETY"}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#,
        ] {
            let err = extract_candidate_text(body).unwrap_err();
            assert!(matches!(err, Error::EmptyResponse), "body: {body}");
        }
    }

    #[test]
    fn malformed_body_is_parse_error() {
        for body in ["not json", "[1, 2]", r#"{"candidates": "nope"}"#] {
            let err = extract_candidate_text(body).unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "body: {body}");
        }
    }
}
