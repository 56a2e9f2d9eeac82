//! Display-shaped records produced by the adapters.
//!
//! Everything in this module is the *front-end* shape: stat keys are display
//! labels, positions are typed, and the ML score is already rounded. The raw
//! backend wire shapes live in [`crate::backend::types`].

use crate::cli::types::{PlayerId, Position};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a player's recent scoring trend.
///
/// Derived from the ML score at adaptation time; there is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}

/// A news item attached to a player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A normalized player record as the dashboard consumes it.
///
/// Constructed fresh on every adapter call; never mutated in place. Updates
/// such as attaching a note produce a new record merged into collection
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Team display name; `"UNK"` when the backend omits it.
    pub team: String,
    pub position: Position,
    /// Display label -> per-game/season average, rounded to one decimal.
    pub stats: BTreeMap<String, f64>,
    /// Opaque backend-computed rating, rounded to the nearest integer.
    pub ml_score: i64,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_news: Vec<News>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_seasons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_games: Option<u32>,
}

impl Player {
    /// Copy of this record with a replaced note and a fresh update stamp.
    pub fn with_note(&self, note: impl Into<String>, stamped: NaiveDate) -> Self {
        Self {
            note: note.into(),
            last_updated: Some(stamped),
            ..self.clone()
        }
    }
}

/// A normalized team record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    /// Short code derived from the team name, e.g. `"KC"`.
    pub code: String,
    pub strength: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_qb: Option<Box<Player>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rb: Option<Box<Player>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_wr: Option<Box<Player>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_te: Option<Box<Player>>,
}

/// One tier bucket of the favorites summary for a position + stat choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSummary {
    /// Coarse bucket label, e.g. `"High"`.
    pub tier: String,
    pub count: u64,
}
