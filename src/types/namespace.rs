use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Messages (or shares, from `namespaced_shares/{id}`) of one namespace.
///
/// `data` holds base64 strings; use [`NamespaceData::get_bytes`] to decode them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceData {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u64,
}

/// Shares of one namespace at a given height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceShares {
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub shares: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_namespace_data() {
        let data: NamespaceData =
            serde_json::from_str(r#"{"data": ["aGVsbG8=", "d29ybGQ="], "height": 7}"#)
                .expect("decode");
        assert_eq!(data.data, ["aGVsbG8=", "d29ybGQ="]);
        assert_eq!(data.height, 7);
    }

    #[test]
    fn absent_or_null_data_is_empty() {
        let absent: NamespaceData = serde_json::from_str(r#"{"height": 3}"#).expect("decode");
        let null: NamespaceShares =
            serde_json::from_str(r#"{"shares": null, "height": 3}"#).expect("decode");
        assert!(absent.data.is_empty());
        assert!(null.shares.is_empty());
        assert_eq!(null.height, 3);
    }

    #[test]
    fn empty_lists_are_omitted_on_encode() {
        let data = NamespaceData {
            data: Vec::new(),
            height: 9,
        };
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"height":9}"#);

        let shares = NamespaceShares {
            shares: vec!["AA==".to_string()],
            height: 9,
        };
        assert_eq!(
            serde_json::to_string(&shares).unwrap(),
            r#"{"shares":["AA=="],"height":9}"#
        );
    }
}
