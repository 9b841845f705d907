use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CategoryParseError;

/// Employment position. Recorded on a [`TaxRecord`](super::TaxRecord) but not
/// used by the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Regular,
    Contract,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Contract => "Contract",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Some(Self::Regular),
            "contract" => Some(Self::Contract),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CategoryParseError::UnrecognizedCategory(s.to_string()))
    }
}
