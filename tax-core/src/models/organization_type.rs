use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a category string does not name a known variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryParseError {
    #[error("unrecognized category '{0}'")]
    UnrecognizedCategory(String),
}

/// The kind of organization that employs the taxpayer.
///
/// Drives the provident fund (waived for [`Government`](Self::Government))
/// and group insurance ([`Corporate`](Self::Corporate) only) deductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    Government,
    Private,
    Corporate,
}

impl OrganizationType {
    pub fn all() -> &'static [OrganizationType] {
        &[Self::Government, Self::Private, Self::Corporate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Private => "Private",
            Self::Corporate => "Corporate",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "government" => Some(Self::Government),
            "private" => Some(Self::Private),
            "corporate" => Some(Self::Corporate),
            _ => None,
        }
    }

    /// Provident fund contributions are not deducted for government employees.
    pub fn pays_provident_fund(&self) -> bool {
        !matches!(self, Self::Government)
    }

    pub fn has_group_insurance(&self) -> bool {
        matches!(self, Self::Corporate)
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationType {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CategoryParseError::UnrecognizedCategory(s.to_string()))
    }
}
