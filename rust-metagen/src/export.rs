//! Saving a generated record to disk as JSON or plain text.

use std::path::Path;

use rust_metagen_types::export::{ExportDocument, ExportFormat};
use rust_metagen_types::metadata::MetadataRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// 导出文档中的时间格式。
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 以当前本地时间构建导出文档。
#[must_use]
pub fn export_document(record: &MetadataRecord, source_file: Option<&Path>) -> ExportDocument {
    let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    ExportDocument::new(record, generated_at, source_file)
}

/// 渲染导出文档。
///
/// # Errors
/// JSON 序列化失败时返回错误。
pub fn render_export(document: &ExportDocument, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => render_json(document),
        ExportFormat::Text => Ok(render_text(document)),
    }
}

/// 将记录写入 `path`，格式由扩展名决定。
///
/// # Errors
/// 渲染或写文件失败时返回错误。
pub async fn write_export(
    path: impl AsRef<Path>,
    record: &MetadataRecord,
    source_file: Option<&Path>,
) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);
    let document = export_document(record, source_file);
    let rendered = render_export(&document, format)?;
    tokio::fs::write(path, rendered).await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), ?format, "exported metadata");

    Ok(format)
}

fn render_json(document: &ExportDocument) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn render_text(document: &ExportDocument) -> String {
    format!(
        "Title: {}\n\nDescription: {}\n\nKeywords: {}\n\nGenerated at: {}\nSource file: {}\n",
        document.title,
        document.description,
        document.keywords.join(", "),
        document.generated_at,
        document.source_file,
    )
}
