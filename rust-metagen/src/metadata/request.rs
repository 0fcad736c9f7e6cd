use std::path::Path;

use rust_metagen_types::media::MediaKind;
use rust_metagen_types::models::{GenerateContentRequest, GenerateMetadataConfig};

pub(super) fn build_request(
    data: Vec<u8>,
    kind: MediaKind,
    mime_type: String,
) -> GenerateContentRequest {
    GenerateContentRequest::for_media(data, kind, mime_type)
}

/// 显式覆盖 > 扩展名猜测（需开启且有路径）> 类别默认值。
pub(super) fn resolve_mime_type(
    kind: MediaKind,
    config: &GenerateMetadataConfig,
    path: Option<&Path>,
) -> String {
    if let Some(mime_type) = config
        .mime_type
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return mime_type.to_string();
    }
    match path {
        Some(path) if config.guess_mime_type => kind.guess_mime_type(path),
        _ => kind.default_mime_type().to_string(),
    }
}
