//! Unit tests for backend wire-shape deserialization

use super::*;
use serde_json::json;

#[test]
fn test_backend_player_full_row() {
    let row = json!({
        "playerID": "00-0033873",
        "playerName": "Patrick Mahomes",
        "playerAge": 28,
        "teamID": 16,
        "teamName": "Kansas City Chiefs",
        "position": "QB",
        "score": 94.2,
        "numSeasons": 7,
        "numGames": 103,
        "stats": {
            "avgpassYds": 287.4,
            "avgpassTDs": "2.3",
            "avgints": null
        }
    });

    let player: BackendPlayer = serde_json::from_value(row).unwrap();
    assert_eq!(player.player_id, "00-0033873");
    assert_eq!(player.player_name, "Patrick Mahomes");
    assert_eq!(player.team_name.as_deref(), Some("Kansas City Chiefs"));
    assert_eq!(player.score, Some(94.2));
    assert_eq!(player.num_games, Some(103));
    // Values stay raw until adaptation: numbers, strings, and nulls all land
    assert_eq!(player.stats.len(), 3);
    assert!(player.stats["avgpassTDs"].is_string());
    assert!(player.stats["avgints"].is_null());
}

#[test]
fn test_backend_player_sparse_row() {
    // Embedded favorite rows can omit nearly everything but identity
    let row = json!({
        "playerID": "X1",
        "playerName": "A",
        "position": "WR"
    });

    let player: BackendPlayer = serde_json::from_value(row).unwrap();
    assert_eq!(player.player_age, None);
    assert_eq!(player.team_name, None);
    assert_eq!(player.score, None);
    assert!(player.stats.is_empty());
}

#[test]
fn test_backend_team_listing_row_has_no_top_players() {
    let row = json!({
        "teamID": 2,
        "teamName": "Buffalo Bills",
        "teamStrength": 0.9
    });

    let team: BackendTeam = serde_json::from_value(row).unwrap();
    assert_eq!(team.team_id, 2);
    assert_eq!(team.team_strength, Some(0.9));
    assert!(team.top_qb.is_none());
    assert!(team.top_te.is_none());
}

#[test]
fn test_backend_team_detail_row_embeds_top_players() {
    let row = json!({
        "teamID": 16,
        "teamName": "Kansas City Chiefs",
        "teamStrength": 0.92,
        "topQB": {
            "playerID": "00-0033873",
            "playerName": "Patrick Mahomes",
            "position": "QB",
            "score": 94.0
        },
        "topTE": {
            "playerID": "00-0030506",
            "playerName": "Travis Kelce",
            "position": "TE",
            "score": 89.0
        }
    });

    let team: BackendTeam = serde_json::from_value(row).unwrap();
    assert_eq!(
        team.top_qb.as_ref().map(|p| p.player_name.as_str()),
        Some("Patrick Mahomes")
    );
    assert!(team.top_rb.is_none());
    assert_eq!(
        team.top_te.as_ref().map(|p| p.position.as_str()),
        Some("TE")
    );
}

#[test]
fn test_backend_user_defaults_to_no_favorites() {
    let row = json!({ "username": "demo" });
    let user: BackendUser = serde_json::from_value(row).unwrap();
    assert_eq!(user.username, "demo");
    assert!(user.favorites.is_empty());
}

#[test]
fn test_backend_favorite_summary_accepts_capitalized_count() {
    // The stored procedure returns the column as "Count"
    let row = json!({ "tier": "High", "Count": 3 });
    let summary: BackendFavoriteSummary = serde_json::from_value(row).unwrap();
    assert_eq!(summary.tier, "High");
    assert_eq!(summary.count, 3);

    let row = json!({ "tier": "Low", "count": 1 });
    let summary: BackendFavoriteSummary = serde_json::from_value(row).unwrap();
    assert_eq!(summary.count, 1);
}
