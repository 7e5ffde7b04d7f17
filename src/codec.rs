//! JSON codec used by [`NodeClient`](crate::NodeClient) for request and
//! response bodies.
//!
//! Each client owns its codec, so two clients in one process can encode and
//! decode differently without touching shared state.

use serde::{Serialize, de::DeserializeOwned};

/// Encodes request bodies and decodes response bodies.
pub trait JsonCodec: Send + Sync {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<Vec<u8>>;

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> serde_json::Result<T>;
}

/// `serde_json` with its standard settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec;

impl JsonCodec for StandardCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(value)
    }

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> serde_json::Result<T> {
        serde_json::from_slice(body)
    }
}
