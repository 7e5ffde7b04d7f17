use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::{decimal_amount, null_as_default};

/// Result of a data availability sampling round at one height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataAvailableResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub available: bool,
    /// Decimal probability, kept as the string the node sent.
    #[serde(deserialize_with = "null_as_default")]
    pub probability_of_availability: String,
}

/// Account balance.
///
/// `amount` is an arbitrary-precision decimal. It encodes as a decimal string
/// and decodes from either a string or a JSON number, reading the digits as
/// sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    #[serde(deserialize_with = "null_as_default")]
    pub denom: String,
    #[serde(deserialize_with = "decimal_amount")]
    pub amount: BigDecimal,
}
