//! Shared types for the Gemini media metadata generator.

mod base64_serde;

pub mod config;
pub mod content;
pub mod export;
pub mod media;
pub mod metadata;
pub mod models;
pub mod response;
