use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// 输入文件的媒体类别，决定提示词与声明的 MIME 类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv"];

impl MediaKind {
    /// 该类别对应的提示词。
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Image => "Generate comprehensive metadata for this image including a descriptive title, detailed description, and relevant keywords. Format the response as JSON with fields 'title', 'description', and 'keywords' (as an array).",
            Self::Video => "Generate comprehensive metadata for this video including a descriptive title, detailed description, and relevant keywords. Format the response as JSON with fields 'title', 'description', and 'keywords' (as an array).",
        }
    }

    /// 默认声明的 MIME 类型。
    ///
    /// 只取决于类别，不检查文件内容：PNG 图片同样以 `image/jpeg` 发送。
    #[must_use]
    pub const fn default_mime_type(self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Video => "video/mp4",
        }
    }

    /// MIME 顶层类型（`image` / `video`），也是 `Display` 的输出。
    #[must_use]
    pub const fn top_level_type(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// 根据扩展名推断类别。
    ///
    /// 先匹配常见图片/视频扩展名，其余交给 `mime_guess`。
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)?;
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Some(Self::Image);
        }
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            return Some(Self::Video);
        }
        let guess = mime_guess::from_path(path).first()?;
        match guess.type_().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// 根据扩展名猜测 MIME 类型；猜测结果与类别不符时回退到默认值。
    pub fn guess_mime_type(self, path: impl AsRef<Path>) -> String {
        mime_guess::from_path(path)
            .iter()
            .find(|mime| mime.type_().as_str() == self.top_level_type())
            .map_or_else(
                || self.default_mime_type().to_string(),
                |mime| mime.essence_str().to_string(),
            )
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.top_level_type())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(format!("unknown media kind: {other}")),
        }
    }
}
