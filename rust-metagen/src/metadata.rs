//! Metadata generation API surface.
//!
//! One call reads a media file, sends it inline to `generateContent` together with a
//! fixed prompt, and normalizes the model's free-form answer into a [`MetadataRecord`].

use std::path::Path;
use std::sync::Arc;

use rust_metagen_types::media::MediaKind;
use rust_metagen_types::metadata::MetadataRecord;
use rust_metagen_types::models::{GenerateContentRequest, GenerateMetadataConfig};
use tokio::sync::mpsc::UnboundedSender;

use crate::client::ClientInner;
use crate::error::Result;
use crate::normalizer::normalize;
use crate::progress::{GenerationProgress, GenerationStage, ProgressReporter};

mod http;
mod request;

use http::{api_error, build_generate_url, extract_candidate_text};
use request::{build_request, resolve_mime_type};

#[derive(Clone)]
pub struct Metadata {
    pub(crate) inner: Arc<ClientInner>,
}

impl Metadata {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 读取文件并生成元数据（默认配置）。
    ///
    /// # Errors
    /// 读取文件失败、网络错误、API 返回错误或响应中没有文本时返回错误。
    pub async fn generate(
        &self,
        path: impl AsRef<Path>,
        kind: MediaKind,
    ) -> Result<MetadataRecord> {
        self.generate_with_config(path, kind, GenerateMetadataConfig::default())
            .await
    }

    /// 读取文件并生成元数据（自定义配置）。
    ///
    /// # Errors
    /// 同 [`Metadata::generate`]。
    pub async fn generate_with_config(
        &self,
        path: impl AsRef<Path>,
        kind: MediaKind,
        config: GenerateMetadataConfig,
    ) -> Result<MetadataRecord> {
        self.generate_from_path(path.as_ref(), kind, &config, ProgressReporter::silent())
            .await
    }

    /// 读取文件并生成元数据，同时通过 `progress` 推送阶段事件。
    ///
    /// 阶段事件之后总会有一个终止事件（`Completed` 或 `Failed`）。
    ///
    /// # Errors
    /// 同 [`Metadata::generate`]。
    pub async fn generate_with_progress(
        &self,
        path: impl AsRef<Path>,
        kind: MediaKind,
        config: GenerateMetadataConfig,
        progress: &UnboundedSender<GenerationProgress>,
    ) -> Result<MetadataRecord> {
        let reporter = ProgressReporter::new(Some(progress));
        let result = self
            .generate_from_path(path.as_ref(), kind, &config, reporter)
            .await;
        reporter.finish(&result);
        result
    }

    /// 对内存中的数据生成元数据。
    ///
    /// 不会猜测 MIME 类型；`config.mime_type` 未设置时使用类别默认值。
    ///
    /// # Errors
    /// 网络错误、API 返回错误或响应中没有文本时返回错误。
    pub async fn generate_from_bytes(
        &self,
        data: Vec<u8>,
        kind: MediaKind,
        config: GenerateMetadataConfig,
    ) -> Result<MetadataRecord> {
        let mime_type = resolve_mime_type(kind, &config, None);
        self.generate_payload(data, kind, mime_type, ProgressReporter::silent())
            .await
    }

    /// 发送请求并返回模型的原始文本（不做规范化）。
    ///
    /// # Errors
    /// 网络错误、API 返回错误或响应中没有文本时返回错误。
    pub async fn request_text(&self, data: Vec<u8>, kind: MediaKind) -> Result<String> {
        self.request_text_with_config(data, kind, GenerateMetadataConfig::default())
            .await
    }

    /// 发送请求并返回模型的原始文本（自定义配置）。
    ///
    /// # Errors
    /// 同 [`Metadata::request_text`]。
    pub async fn request_text_with_config(
        &self,
        data: Vec<u8>,
        kind: MediaKind,
        config: GenerateMetadataConfig,
    ) -> Result<String> {
        let mime_type = resolve_mime_type(kind, &config, None);
        let request = build_request(data, kind, mime_type);
        self.send_generate(&request, ProgressReporter::silent())
            .await
    }

    async fn generate_from_path(
        &self,
        path: &Path,
        kind: MediaKind,
        config: &GenerateMetadataConfig,
        reporter: ProgressReporter<'_>,
    ) -> Result<MetadataRecord> {
        reporter.stage(GenerationStage::Started);
        let data = tokio::fs::read(path).await?;
        reporter.stage(GenerationStage::FileLoaded);

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), bytes = data.len(), %kind, "loaded media file");

        let mime_type = resolve_mime_type(kind, config, Some(path));
        self.generate_payload(data, kind, mime_type, reporter).await
    }

    async fn generate_payload(
        &self,
        data: Vec<u8>,
        kind: MediaKind,
        mime_type: String,
        reporter: ProgressReporter<'_>,
    ) -> Result<MetadataRecord> {
        let request = build_request(data, kind, mime_type);
        reporter.stage(GenerationStage::PayloadReady);

        let text = self.send_generate(&request, reporter).await?;
        let record = normalize(&text);
        reporter.stage(GenerationStage::ResponseParsed);
        Ok(record)
    }

    async fn send_generate(
        &self,
        request: &GenerateContentRequest,
        reporter: ProgressReporter<'_>,
    ) -> Result<String> {
        let url = build_generate_url(&self.inner);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %self.inner.config.model, "sending generateContent");

        let builder = self.inner.http.post(url).json(request);
        reporter.stage(GenerationStage::RequestSent);
        let response = self.inner.send(builder).await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let body = response.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = body.len(), "received generateContent response");

        extract_candidate_text(&body)
    }
}
