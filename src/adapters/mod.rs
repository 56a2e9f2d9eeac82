//! Adapters from backend wire shapes to display shapes.
//!
//! Pure transformations: no I/O, no shared state. The only ambient input is
//! the clock, used to stamp `last_updated` on freshly adapted players.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::backend::types::{BackendFavoriteSummary, BackendPlayer, BackendTeam};
use crate::cli::types::{PlayerId, Position};
use crate::model::{FavoriteSummary, Player, Team, Trend};


/// Scores strictly above this mark trend up; everything else trends down.
const TREND_THRESHOLD: f64 = 85.0;

/// Stand-in score when the backend omits one.
const DEFAULT_SCORE: f64 = 50.0;

/// Prefix the backend puts on averaged stat columns.
const STAT_PREFIX: &str = "avg";

/// Adapt a backend player row into the display shape, stamping today's date.
pub fn adapt_player(raw: &BackendPlayer) -> Player {
    adapt_player_stamped(raw, Local::now().date_naive())
}

/// Adapt with an explicit `last_updated` stamp.
pub fn adapt_player_stamped(raw: &BackendPlayer, stamped: NaiveDate) -> Player {
    let mut stats = std::collections::BTreeMap::new();
    for (key, value) in &raw.stats {
        if let Some(stat_name) = key.strip_prefix(STAT_PREFIX) {
            stats.insert(display_stat_name(stat_name), round_one_decimal(parse_stat(value)));
        }
    }

    let score = raw.score.unwrap_or(DEFAULT_SCORE);
    let trend = if score > TREND_THRESHOLD {
        Trend::Up
    } else {
        Trend::Down
    };

    Player {
        id: PlayerId::new(raw.player_id.clone()),
        name: raw.player_name.clone(),
        team: raw.team_name.clone().unwrap_or_else(|| "UNK".to_string()),
        position: raw.position.parse().unwrap_or(Position::QB),
        stats,
        ml_score: score.round() as i64,
        trend,
        last_updated: Some(stamped),
        note: String::new(),
        recent_news: Vec::new(),
        age: raw.player_age,
        num_seasons: raw.num_seasons,
        num_games: raw.num_games,
    }
}

/// Adapt a backend team row, recursing into any embedded top players.
pub fn adapt_team(raw: &BackendTeam) -> Team {
    Team {
        id: raw.team_id,
        name: raw.team_name.clone(),
        code: team_code(&raw.team_name),
        strength: raw.team_strength.unwrap_or(0.0),
        top_qb: raw.top_qb.as_ref().map(|p| Box::new(adapt_player(p))),
        top_rb: raw.top_rb.as_ref().map(|p| Box::new(adapt_player(p))),
        top_wr: raw.top_wr.as_ref().map(|p| Box::new(adapt_player(p))),
        top_te: raw.top_te.as_ref().map(|p| Box::new(adapt_player(p))),
    }
}

pub fn adapt_favorite_summary(raw: &BackendFavoriteSummary) -> FavoriteSummary {
    FavoriteSummary {
        tier: raw.tier.clone(),
        count: raw.count,
    }
}

/// Derive a short team code from a full team name.
///
/// Canonical NFL names use the official code; any other multi-word name
/// falls back to its upper-cased initials, and a single-word name truncates
/// to three characters.
pub fn team_code(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() <= 1 {
        return name.chars().take(3).collect::<String>().to_uppercase();
    }

    if let Some(code) = canonical_team_code(name) {
        return code.to_string();
    }

    words
        .iter()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

fn canonical_team_code(name: &str) -> Option<&'static str> {
    let code = match name {
        "Arizona Cardinals" => "ARI",
        "Atlanta Falcons" => "ATL",
        "Baltimore Ravens" => "BAL",
        "Buffalo Bills" => "BUF",
        "Carolina Panthers" => "CAR",
        "Chicago Bears" => "CHI",
        "Cincinnati Bengals" => "CIN",
        "Cleveland Browns" => "CLE",
        "Dallas Cowboys" => "DAL",
        "Denver Broncos" => "DEN",
        "Detroit Lions" => "DET",
        "Green Bay Packers" => "GB",
        "Houston Texans" => "HOU",
        "Indianapolis Colts" => "IND",
        "Jacksonville Jaguars" => "JAX",
        "Kansas City Chiefs" => "KC",
        "Las Vegas Raiders" => "LV",
        "Los Angeles Chargers" => "LAC",
        "Los Angeles Rams" => "LAR",
        "Miami Dolphins" => "MIA",
        "Minnesota Vikings" => "MIN",
        "New England Patriots" => "NE",
        "New Orleans Saints" => "NO",
        "New York Giants" => "NYG",
        "New York Jets" => "NYJ",
        "Philadelphia Eagles" => "PHI",
        "Pittsburgh Steelers" => "PIT",
        "San Francisco 49ers" => "SF",
        "Seattle Seahawks" => "SEA",
        "Tampa Bay Buccaneers" => "TB",
        "Tennessee Titans" => "TEN",
        "Washington Commanders" => "WAS",
        _ => return None,
    };
    Some(code)
}

/// Turn a stripped backend stat name into its display label.
///
/// The first letter is capitalized, then the fixed display table applies;
/// unknown stats keep the capitalized raw name.
fn display_stat_name(stat_name: &str) -> String {
    let mut chars = stat_name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    let display = match capitalized.as_str() {
        "PassYds" => "Passing Yards",
        "PassTDs" => "Passing TDs",
        "Ints" => "Interceptions",
        "CompPct" => "Completion %",
        "RshAtt" => "Rush Attempts",
        "RshYds" => "Rushing Yards",
        "RshTDs" => "Rushing TDs",
        "Rec" => "Receptions",
        "RecYds" => "Receiving Yards",
        "RecTDs" => "Receiving TDs",
        _ => return capitalized,
    };
    display.to_string()
}

/// Defensive numeric parse: numbers pass through, numeric strings parse,
/// anything else (null, garbage, NaN) becomes 0.
fn parse_stat(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
