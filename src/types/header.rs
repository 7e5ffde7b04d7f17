use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Extended header returned by `head` and `header/{height}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub header: Header,
    #[serde(deserialize_with = "null_as_default")]
    pub commit: Commit,
    #[serde(deserialize_with = "null_as_default")]
    pub validator_set: ValidatorSet,
    #[serde(deserialize_with = "null_as_default")]
    pub dah: Dah,
}

/// Raw block header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(deserialize_with = "null_as_default")]
    pub version: Version,
    #[serde(deserialize_with = "null_as_default")]
    pub chain_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub time: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_block_id: BlockId,
    #[serde(deserialize_with = "null_as_default")]
    pub last_commit_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validators_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub next_validators_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub consensus_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub app_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_results_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proposer_address: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    #[serde(deserialize_with = "null_as_default")]
    pub block: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockId {
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parts: BlockIdParts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockIdParts {
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,
}

/// Commit that finalized the header's block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "null_as_default")]
    pub height: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub round: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_id: BlockId,
    #[serde(deserialize_with = "null_as_default")]
    pub signatures: Vec<Signature>,
}

/// A single validator's commit signature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signature {
    #[serde(deserialize_with = "null_as_default")]
    pub block_id_flag: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub validator_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSet {
    #[serde(deserialize_with = "null_as_default")]
    pub validators: Vec<Validator>,
    #[serde(deserialize_with = "null_as_default")]
    pub proposer: Validator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Validator {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pub_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub voting_power: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub proposer_priority: i64,
}

/// Data availability header: Merkle roots over the rows and columns of the
/// erasure-coded block data square.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dah {
    #[serde(deserialize_with = "null_as_default")]
    pub row_roots: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub column_roots: Vec<String>,
}
