//! Fixture data served when the backend is unreachable.
//!
//! The fixtures are backend-shaped: exactly what the real REST endpoints
//! would return, so the adapters downstream cannot tell the difference. The
//! proxy depends on the [`MockStore`] trait rather than the static data, so
//! tests can substitute their own fixtures.

use axum::http::Method;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Page size the fixture player listing is sliced to.
pub const MOCK_PAGE_SIZE: usize = 10;

/// Source of fallback responses for failed backend requests.
///
/// `lookup` returns `None` when no fixture matches; the proxy then turns
/// that into a 404 (GET) or failure echo (mutating verbs).
pub trait MockStore: Send + Sync {
    fn lookup(
        &self,
        method: &Method,
        path: &str,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Option<Value>;
}

/// The built-in demo dataset.
pub struct StaticMockStore {
    players: Vec<Value>,
    teams: Vec<Value>,
    users: Vec<Value>,
}

impl Default for StaticMockStore {
    fn default() -> Self {
        Self {
            players: fixture_players(),
            teams: fixture_teams(),
            users: fixture_users(),
        }
    }
}

impl StaticMockStore {
    fn players_page(&self, query: &HashMap<String, String>) -> Value {
        let page: usize = query
            .get("page")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(1)
            .max(1);
        let position = query.get("position").map(String::as_str);

        let filtered: Vec<&Value> = self
            .players
            .iter()
            .filter(|player| match position {
                Some(position) if position != "all" => player["position"] == position,
                _ => true,
            })
            .collect();

        let start = (page - 1) * MOCK_PAGE_SIZE;
        let slice: Vec<Value> = filtered
            .into_iter()
            .skip(start)
            .take(MOCK_PAGE_SIZE)
            .cloned()
            .collect();
        Value::Array(slice)
    }

    fn player_by_id(&self, id: &str) -> Option<Value> {
        self.players
            .iter()
            .find(|player| player["playerID"] == id)
            .cloned()
    }

    fn user_by_name(&self, username: &str) -> Option<Value> {
        let user = self
            .users
            .iter()
            .find(|user| user["username"] == username)?;

        let favorites: Vec<Value> = user["favorites"]
            .as_array()
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| id.as_str())
                    .filter_map(|id| self.player_by_id(id))
                    .collect()
            })
            .unwrap_or_default();

        Some(json!({
            "username": user["username"],
            "favorites": favorites,
        }))
    }
}

impl MockStore for StaticMockStore {
    fn lookup(
        &self,
        method: &Method,
        path: &str,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Option<Value> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if *method == Method::GET {
            return match segments[..] {
                ["players"] => Some(self.players_page(query)),
                ["players", id] => self.player_by_id(id),
                ["teams"] => Some(Value::Array(self.teams.clone())),
                ["users", username] => self.user_by_name(username),
                _ => None,
            };
        }

        if *method == Method::POST {
            if segments[..] == ["users"] {
                let username = username_from_body(body)?;
                return Some(json!({ "username": username, "success": true }));
            }
            // favorite adds and anything else get a success echo
            return Some(json!({ "success": true }));
        }

        if *method == Method::PUT || *method == Method::PATCH || *method == Method::DELETE {
            return Some(json!({ "success": true }));
        }

        None
    }
}

/// Pull a username out of a JSON or form-encoded request body.
fn username_from_body(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?;

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(username) = value.get("username").and_then(Value::as_str) {
            return Some(username.to_string());
        }
    }

    text.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "username").then(|| value.replace('+', " "))
    })
}

fn player_fixture(
    id: &str,
    name: &str,
    team_id: i64,
    team: &str,
    position: &str,
    score: f64,
    stats: Value,
) -> Value {
    json!({
        "playerID": id,
        "playerName": name,
        "teamID": team_id,
        "teamName": team,
        "position": position,
        "score": score,
        "numSeasons": 5,
        "numGames": 78,
        "stats": stats,
    })
}

fn fixture_players() -> Vec<Value> {
    vec![
        player_fixture(
            "1",
            "Patrick Mahomes",
            1,
            "Kansas City Chiefs",
            "QB",
            94.0,
            json!({ "avgpassYds": 287.4, "avgpassTDs": 2.4, "avgints": 0.7, "avgcompPct": 67.2 }),
        ),
        player_fixture(
            "2",
            "Josh Allen",
            2,
            "Buffalo Bills",
            "QB",
            92.0,
            json!({ "avgpassYds": 267.3, "avgpassTDs": 2.2, "avgints": 0.8, "avgcompPct": 65.8 }),
        ),
        player_fixture(
            "3",
            "Travis Kelce",
            1,
            "Kansas City Chiefs",
            "TE",
            89.0,
            json!({ "avgrec": 5.5, "avgrecYds": 57.9, "avgrecTDs": 0.3 }),
        ),
        player_fixture(
            "4",
            "Christian McCaffrey",
            3,
            "San Francisco 49ers",
            "RB",
            93.0,
            json!({ "avgrshAtt": 16.9, "avgrshYds": 85.8, "avgrshTDs": 0.8 }),
        ),
        player_fixture(
            "5",
            "Tyreek Hill",
            4,
            "Miami Dolphins",
            "WR",
            91.0,
            json!({ "avgrec": 7.0, "avgrecYds": 104.6, "avgrecTDs": 0.8 }),
        ),
        player_fixture(
            "6",
            "CeeDee Lamb",
            5,
            "Dallas Cowboys",
            "WR",
            88.0,
            json!({ "avgrec": 7.9, "avgrecYds": 102.9, "avgrecTDs": 0.7 }),
        ),
        player_fixture(
            "7",
            "Dak Prescott",
            5,
            "Dallas Cowboys",
            "QB",
            84.0,
            json!({ "avgpassYds": 265.3, "avgpassTDs": 2.1, "avgints": 0.5, "avgcompPct": 69.5 }),
        ),
        player_fixture(
            "8",
            "Raheem Mostert",
            4,
            "Miami Dolphins",
            "RB",
            81.0,
            json!({ "avgrshAtt": 12.8, "avgrshYds": 60.8, "avgrshTDs": 1.1 }),
        ),
        player_fixture(
            "9",
            "Stefon Diggs",
            2,
            "Buffalo Bills",
            "WR",
            85.0,
            json!({ "avgrec": 6.6, "avgrecYds": 70.5, "avgrecTDs": 0.5 }),
        ),
        player_fixture(
            "10",
            "George Kittle",
            3,
            "San Francisco 49ers",
            "TE",
            84.0,
            json!({ "avgrec": 4.1, "avgrecYds": 63.7, "avgrecTDs": 0.4 }),
        ),
        player_fixture(
            "11",
            "Brock Purdy",
            3,
            "San Francisco 49ers",
            "QB",
            86.0,
            json!({ "avgpassYds": 267.5, "avgpassTDs": 1.9, "avgints": 0.7, "avgcompPct": 69.4 }),
        ),
        player_fixture(
            "12",
            "Isiah Pacheco",
            1,
            "Kansas City Chiefs",
            "RB",
            79.0,
            json!({ "avgrshAtt": 14.4, "avgrshYds": 58.3, "avgrshTDs": 0.5 }),
        ),
    ]
}

fn fixture_teams() -> Vec<Value> {
    vec![
        json!({ "teamID": 1, "teamName": "Kansas City Chiefs", "teamStrength": 0.92 }),
        json!({ "teamID": 2, "teamName": "Buffalo Bills", "teamStrength": 0.90 }),
        json!({ "teamID": 3, "teamName": "San Francisco 49ers", "teamStrength": 0.89 }),
        json!({ "teamID": 4, "teamName": "Miami Dolphins", "teamStrength": 0.87 }),
        json!({ "teamID": 5, "teamName": "Dallas Cowboys", "teamStrength": 0.86 }),
    ]
}

fn fixture_users() -> Vec<Value> {
    vec![json!({ "username": "demo", "favorites": ["1", "3"] })]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StaticMockStore {
        StaticMockStore::default()
    }

    fn get(store: &StaticMockStore, path: &str, query: &[(&str, &str)]) -> Option<Value> {
        let query: HashMap<String, String> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        store.lookup(&Method::GET, path, &query, b"")
    }

    #[test]
    fn test_players_listing_slices_to_page_size() {
        let store = store();
        let page1 = get(&store, "players", &[]).unwrap();
        assert_eq!(page1.as_array().unwrap().len(), MOCK_PAGE_SIZE);

        let page2 = get(&store, "players", &[("page", "2")]).unwrap();
        assert_eq!(page2.as_array().unwrap().len(), 2);

        let page3 = get(&store, "players", &[("page", "3")]).unwrap();
        assert!(page3.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_players_listing_filters_by_position() {
        let store = store();
        let qbs = get(&store, "players", &[("position", "QB")]).unwrap();
        let qbs = qbs.as_array().unwrap();
        assert_eq!(qbs.len(), 4);
        assert!(qbs.iter().all(|p| p["position"] == "QB"));

        // "all" disables the filter
        let all = get(&store, "players", &[("position", "all")]).unwrap();
        assert_eq!(all.as_array().unwrap().len(), MOCK_PAGE_SIZE);
    }

    #[test]
    fn test_player_lookup_by_id() {
        let store = store();
        let player = get(&store, "players/3", &[]).unwrap();
        assert_eq!(player["playerName"], "Travis Kelce");

        assert!(get(&store, "players/999", &[]).is_none());
    }

    #[test]
    fn test_user_lookup_embeds_full_favorites() {
        let store = store();
        let user = get(&store, "users/demo", &[]).unwrap();
        assert_eq!(user["username"], "demo");
        let favorites = user["favorites"].as_array().unwrap();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0]["playerID"], "1");
        assert!(favorites[0]["stats"].is_object());

        assert!(get(&store, "users/ghost", &[]).is_none());
    }

    #[test]
    fn test_unknown_get_path_is_a_miss() {
        let store = store();
        assert!(get(&store, "articles", &[]).is_none());
        assert!(get(&store, "users/demo/favorites/summary", &[]).is_none());
    }

    #[test]
    fn test_user_create_echoes_username() {
        let store = store();
        let query = HashMap::new();

        let from_form = store
            .lookup(&Method::POST, "users", &query, b"username=ana")
            .unwrap();
        assert_eq!(from_form["username"], "ana");
        assert_eq!(from_form["success"], true);

        let from_json = store
            .lookup(&Method::POST, "users", &query, br#"{"username":"bo"}"#)
            .unwrap();
        assert_eq!(from_json["username"], "bo");
    }

    #[test]
    fn test_mutating_verbs_echo_success() {
        let store = store();
        let query = HashMap::new();

        let added = store
            .lookup(&Method::POST, "users/demo/favorites", &query, b"")
            .unwrap();
        assert_eq!(added["success"], true);

        let removed = store
            .lookup(&Method::DELETE, "users/demo/favorites/3", &query, b"")
            .unwrap();
        assert_eq!(removed["success"], true);
    }
}
