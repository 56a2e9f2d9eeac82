//! Sort-order types shared by listing requests.

use crate::error::ProCompareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction, spelled the way the backend expects it (`ASC`/`DESC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Flip the direction, used by sort-order toggling in listings.
    pub fn toggled(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    /// Wire form sent as the `orderByDir` request parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SortDir {
    type Err = ProCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(SortDir::Asc),
            "DESC" => Ok(SortDir::Desc),
            _ => Err(ProCompareError::InvalidSortDir {
                value: s.to_string(),
            }),
        }
    }
}
