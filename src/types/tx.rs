use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Body of `submit_tx`: a signed transaction, hex-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTx {
    pub tx: String,
}

/// Response of `submit_tx`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmittedTx {
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub txhash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub codespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub raw_log: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub logs: Vec<Log>,
    #[serde(deserialize_with = "null_as_default")]
    pub info: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gas_wanted: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub gas_used: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

/// Body of `submit_pfd`. The node builds, signs and submits the PayForData
/// message itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPfd {
    /// Hex-encoded namespace ID.
    pub namespace_id: String,
    /// Hex-encoded message data.
    pub data: String,
    pub gas_limit: u64,
}

/// Response of `submit_pfd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmittedPfd {
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub txhash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub codespace: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub raw_log: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logs: Vec<Log>,
    #[serde(deserialize_with = "null_as_default")]
    pub gas_wanted: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub gas_used: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

/// ABCI message log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    #[serde(deserialize_with = "null_as_default")]
    pub msg_index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Whether the attribute is indexed. Absent on older nodes; see [`Attribute::is_index`].
    pub index: Option<bool>,
}

impl Attribute {
    /// Returns the index flag, `false` when the node did not send one.
    pub fn is_index(&self) -> bool {
        self.index.unwrap_or(false)
    }
}
