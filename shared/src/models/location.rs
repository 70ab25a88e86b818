//! Location Model

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of office locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "San Francisco")]
    SanFrancisco,
    #[serde(rename = "London")]
    London,
    #[serde(rename = "Singapore")]
    Singapore,
    #[serde(rename = "Remote")]
    Remote,
}

impl Location {
    /// All locations, in display order
    pub const ALL: [Location; 5] = [
        Location::NewYork,
        Location::SanFrancisco,
        Location::London,
        Location::Singapore,
        Location::Remote,
    ];

    /// Display / wire label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NewYork => "New York",
            Self::SanFrancisco => "San Francisco",
            Self::London => "London",
            Self::Singapore => "Singapore",
            Self::Remote => "Remote",
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::Remote
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.label() == s).ok_or_else(|| {
            AppError::with_message(ErrorCode::UnknownLocation, format!("Unknown location: {}", s))
        })
    }
}

/// Location record as stored in the record backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
}
