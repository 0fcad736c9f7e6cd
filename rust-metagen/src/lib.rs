//! Core client crate for generating image and video metadata with Gemini.

pub mod client;
pub mod error;
pub mod export;
pub mod metadata;
pub mod normalizer;
pub mod progress;

#[cfg(test)]
mod test_support;

pub use rust_metagen_types as types;

pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions, DEFAULT_MODEL};
pub use error::{Error, Result};
pub use export::{export_document, render_export, write_export};
pub use normalizer::normalize;
pub use progress::{GenerationProgress, GenerationStage};
pub use rust_metagen_types::export::{ExportDocument, ExportFormat};
pub use rust_metagen_types::media::MediaKind;
pub use rust_metagen_types::metadata::MetadataRecord;
pub use rust_metagen_types::models::GenerateMetadataConfig;
