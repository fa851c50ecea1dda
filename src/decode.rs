use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, Result};

/// Decode an API payload, reporting the dotted path of the field that
/// failed when the shape does not match.
pub fn from_json_str<T: DeserializeOwned>(payload: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(payload);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let field = e.path().to_string();
        tracing::debug!("decode failed at `{}`: {}", field, e.inner());
        ClientError::Decode {
            field,
            source: e.into_inner(),
        }
    })
}

pub fn to_json_str<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(ClientError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Inner {
        count: i64,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        items: Vec<Inner>,
    }

    #[test]
    fn error_carries_field_path() {
        let err = from_json_str::<Outer>(r#"{"items":[{"count":"three"}]}"#).unwrap_err();
        match err {
            ClientError::Decode { field, .. } => assert_eq!(field, "items[0].count"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = from_json_str::<Outer>("{not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }
}
