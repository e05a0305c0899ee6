//! User identifiers - numeric ids from the remote API or synthetic local ids.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// Prefix marking identifiers minted on this machine rather than by the server
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Identifier of a user record.
///
/// The remote API hands out numbers, locally created records carry strings.
/// Overlays and tombstones compare identifiers through [`UserId::key`], so
/// `1` and `"1"` refer to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(u64),
    /// Any other JSON number (negative, fractional or out of `u64` range)
    OtherNumber(Number),
    Text(String),
}

impl UserId {
    /// Mint a fresh local identifier (`local-<uuid>`)
    pub fn generate_local() -> Self {
        UserId::Text(format!("{LOCAL_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    /// String-coerced form used for every identity comparison
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Whether this id was minted locally and is unknown to the server
    pub fn is_local(&self) -> bool {
        match self {
            UserId::Numeric(_) | UserId::OtherNumber(_) => false,
            UserId::Text(text) => text.starts_with(LOCAL_ID_PREFIX),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(n) => write!(f, "{n}"),
            UserId::OtherNumber(n) => write!(f, "{n}"),
            UserId::Text(text) => write!(f, "{text}"),
        }
    }
}

impl FromStr for UserId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => UserId::Numeric(n),
            Err(_) => UserId::Text(s.to_string()),
        })
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        UserId::Numeric(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}
