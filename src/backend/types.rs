//! Wire shapes returned by the stats backend.
//!
//! Field spellings follow the backend's JSON exactly (`playerID`,
//! `avgpassYds`, ...); the adapters translate these into the display shapes
//! in [`crate::model`]. Stat values arrive as JSON numbers or numeric
//! strings depending on the backend's column types, so they are kept as raw
//! [`serde_json::Value`]s until adaptation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// A player row from `/players`, `/players/{id}`, or an embedded favorite.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendPlayer {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "playerAge", default)]
    pub player_age: Option<u32>,
    #[serde(rename = "teamID", default)]
    pub team_id: Option<i64>,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    pub position: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(rename = "numSeasons", default)]
    pub num_seasons: Option<u32>,
    #[serde(rename = "numGames", default)]
    pub num_games: Option<u32>,
    /// Keys carry the backend's `avg` prefix, e.g. `avgpassYds`.
    #[serde(default)]
    pub stats: BTreeMap<String, Value>,
}

/// A team row from `/teams` or `/teams/{id}`.
///
/// The per-position top players are only populated on single-team detail
/// responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendTeam {
    #[serde(rename = "teamID")]
    pub team_id: i64,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "teamStrength", default)]
    pub team_strength: Option<f64>,
    #[serde(rename = "topQB", default)]
    pub top_qb: Option<BackendPlayer>,
    #[serde(rename = "topRB", default)]
    pub top_rb: Option<BackendPlayer>,
    #[serde(rename = "topWR", default)]
    pub top_wr: Option<BackendPlayer>,
    #[serde(rename = "topTE", default)]
    pub top_te: Option<BackendPlayer>,
}

/// A user profile from `/users/{username}`, embedding full favorite rows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendUser {
    pub username: String,
    #[serde(default)]
    pub favorites: Vec<BackendPlayer>,
}

/// One row of `/users/{username}/favorites/summary`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendFavoriteSummary {
    pub tier: String,
    #[serde(alias = "Count")]
    pub count: u64,
}
