use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serializer};

/// 将字节编码为标准 base64 字符串。
pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes))
}

/// 将 base64 字符串解码为字节。
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        #[serde(with = "super")]
        data: Vec<u8>,
    }

    #[test]
    fn encodes_bytes_as_standard_base64() {
        let payload = Payload {
            data: b"hello".to_vec(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["data"], "aGVsbG8=");
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = serde_json::from_str::<Payload>(r#"{"data":"not base64!"}"#);
        assert!(result.is_err());
    }
}
