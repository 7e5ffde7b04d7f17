//! Encoding helpers for namespace IDs, namespace payloads and submit bodies.
//!
//! The gateway speaks base64 in responses and hex in paths and request
//! bodies; these helpers convert between the two.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::Result;
use crate::types::{NamespaceData, NamespaceShares, SubmitPfd, SubmitTx};

/// Convert a base64-encoded namespace ID into the lowercase hex form used in
/// gateway paths.
pub fn namespace_id(base64_value: &str) -> Result<String> {
    let decoded = BASE64.decode(base64_value)?;
    Ok(hex::encode(decoded))
}

fn decode_all(encoded: &[String]) -> Result<Vec<Vec<u8>>> {
    encoded
        .iter()
        .map(|item| BASE64.decode(item).map_err(Into::into))
        .collect()
}

// ---------------------------------------------------------------------------
// Namespace payloads
// ---------------------------------------------------------------------------

impl NamespaceData {
    /// Decode every base64 entry of `data`, failing on the first invalid one.
    pub fn get_bytes(&self) -> Result<Vec<Vec<u8>>> {
        decode_all(&self.data)
    }
}

impl NamespaceShares {
    /// Decode every base64 entry of `shares`, failing on the first invalid one.
    pub fn get_bytes(&self) -> Result<Vec<Vec<u8>>> {
        decode_all(&self.shares)
    }
}

// ---------------------------------------------------------------------------
// Submit bodies
// ---------------------------------------------------------------------------

impl SubmitTx {
    /// Wrap a signed, serialized transaction.
    pub fn from_raw(tx: &[u8]) -> Self {
        Self {
            tx: hex::encode(tx),
        }
    }
}

impl SubmitPfd {
    /// Build a PayForData body from raw namespace ID and message bytes.
    pub fn new(namespace_id: &[u8], data: &[u8], gas_limit: u64) -> Self {
        Self {
            namespace_id: hex::encode(namespace_id),
            data: hex::encode(data),
            gas_limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
