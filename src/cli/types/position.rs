//! Player position types and utilities.

use crate::error::ProCompareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL player positions tracked by the comparison backend.
///
/// Only the four offensive skill positions carry per-position statistics;
/// everything else is out of scope for the dashboard.
///
/// # Examples
///
/// ```rust
/// use procompare::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Backend stat column names relevant to this position.
    ///
    /// The backend prefixes each with `avg` in listing responses, e.g.
    /// `passYds` arrives as `avgpassYds`.
    pub fn stat_names(&self) -> &'static [&'static str] {
        match self {
            Position::QB => &["passYds", "passTDs", "ints", "compPct"],
            Position::RB => &["rshAtt", "rshYds", "rshTDs"],
            Position::WR | Position::TE => &["rec", "recYds", "recTDs"],
        }
    }

    /// All positions, in display order.
    pub fn all() -> [Position; 4] {
        [Position::QB, Position::RB, Position::WR, Position::TE]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = ProCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(ProCompareError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
