use serde::{Deserialize, Deserializer, Serialize};

/// 规范化后的媒体元数据。
///
/// 三个字段始终存在；缺失或 `null` 以空字符串 / 空列表表示。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl MetadataRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// 三个字段是否全部为空。
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.keywords.is_empty()
    }

    /// 以 `", "` 连接关键词。
    #[must_use]
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}
