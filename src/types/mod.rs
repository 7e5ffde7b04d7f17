//! Request and response types of the node gateway API.
//!
//! Every response type decodes leniently: missing fields take their zero
//! value, unknown fields are ignored and a `null` list decodes as empty.
//! Field names are the gateway's snake_case names and must not change.

mod account;
mod header;
mod namespace;
mod tx;

pub use account::{Balance, DataAvailableResponse};
pub use header::{
    BlockId, BlockIdParts, Commit, Dah, Header, HeaderResponse, Signature, Validator,
    ValidatorSet, Version,
};
pub use namespace::{NamespaceData, NamespaceShares};
pub use tx::{Attribute, Event, Log, SubmitPfd, SubmitTx, SubmittedPfd, SubmittedTx};

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a decimal from a JSON string or number without going through
/// a float. Relies on `serde_json`'s `arbitrary_precision` to keep the digits
/// of a number. `null` decodes as zero.
pub(crate) fn decimal_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(BigDecimal::default()),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "expected a decimal string or number, found {other}"
            )));
        }
    };
    BigDecimal::from_str(&text).map_err(D::Error::custom)
}
