//! API data models
//!
//! Domain types are shared with the wasm bindings and re-exported here.

use serde::{Deserialize, Deserializer};

pub use shared::models::*;
pub use shared::types::GpsCoordinates;

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default, deserialize_with = "crate::models::double_option")]`
/// on an `Option<Option<T>>` field: absent stays `None`, a JSON null becomes
/// `Some(None)`, and a value becomes `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        breed: Option<Option<String>>,
        #[serde(default, deserialize_with = "double_option")]
        paired_with_blanket_id: Option<Option<Uuid>>,
    }

    #[test]
    fn test_double_option_absent_vs_null_vs_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.breed, None);
        assert_eq!(absent.paired_with_blanket_id, None);

        let null: Patch = serde_json::from_str(r#"{"breed":null}"#).unwrap();
        assert_eq!(null.breed, Some(None));

        let value: Patch = serde_json::from_str(r#"{"breed":"Arabian"}"#).unwrap();
        assert_eq!(value.breed, Some(Some("Arabian".to_string())));
    }
}
