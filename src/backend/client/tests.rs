//! Unit tests for the API client's response contract

use super::*;
use crate::error::ProCompareError;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_player_row(id: &str) -> serde_json::Value {
    json!({
        "playerID": id,
        "playerName": "Test Player",
        "teamName": "Buffalo Bills",
        "position": "QB",
        "score": 88.0,
        "stats": { "avgpassYds": 250.0 }
    })
}

#[tokio::test]
async fn test_list_players_forwards_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("page", "2"))
        .and(query_param("position", "QB"))
        .and(query_param("orderBy", "score"))
        .and(query_param("orderByDir", "DESC"))
        .and(query_param("name", "Allen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sample_player_row("p1")])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let request = PlayerListRequest {
        page: 2,
        order_by: Some("score".to_string()),
        order_dir: Some(SortDir::Desc),
        name: Some("Allen".to_string()),
        team: None,
        position: Some(Position::QB),
    };

    let players = client.list_players(&request).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_id, "p1");
}

#[tokio::test]
async fn test_page_zero_is_clamped_to_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let players = client
        .list_players(&PlayerListRequest::page(0))
        .await
        .unwrap();
    assert!(players.is_empty());
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .get_player(&PlayerId::new("missing"))
        .await
        .unwrap_err();

    match err {
        ProCompareError::NotFound => (),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_other_statuses_map_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .list_teams(&TeamListRequest::default())
        .await
        .unwrap_err();

    match err {
        ProCompareError::Status { code } => assert_eq!(code, 503),
        other => panic!("Expected Status error, got {other:?}"),
    }
    // and the message is the generic status-coded one
    let err = ProCompareError::Status { code: 503 };
    assert_eq!(err.to_string(), "API request failed with status 503");
}

#[tokio::test]
async fn test_empty_body_yields_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/demo"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let value = client.delete_user(&Username::new("demo")).await.unwrap();
    assert_eq!(value, serde_json::Value::Object(Default::default()));
}

#[tokio::test]
async fn test_create_user_posts_form_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_string_contains("username=demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let value = client.create_user(&Username::new("demo")).await.unwrap();
    assert_eq!(value["success"], json!(true));
}

#[tokio::test]
async fn test_add_favorite_sends_player_id_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/demo/favorites"))
        .and(query_param("playerID", "p7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client
        .add_favorite(&Username::new("demo"), &PlayerId::new("p7"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_compare_players_fails_as_a_whole() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_player_row("p1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/players/p2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .compare_players(&PlayerId::new("p1"), &PlayerId::new("p2"))
        .await
        .unwrap_err();
    match err {
        ProCompareError::NotFound => (),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_compare_players_returns_both_in_order() {
    let server = MockServer::start().await;

    for id in ["p1", "p2"] {
        Mock::given(method("GET"))
            .and(path(format!("/players/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_player_row(id)))
            .mount(&server)
            .await;
    }

    let client = ApiClient::new(server.uri());
    let (first, second) = client
        .compare_players(&PlayerId::new("p1"), &PlayerId::new("p2"))
        .await
        .unwrap();
    assert_eq!(first.player_id, "p1");
    assert_eq!(second.player_id, "p2");
}

#[tokio::test]
async fn test_favorite_summary_query_and_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/demo/favorites/summary"))
        .and(query_param("position", "QB"))
        .and(query_param("stat", "passYds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "tier": "High", "Count": 2 },
            { "tier": "Low", "Count": 1 }
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let rows = client
        .favorite_summary(&Username::new("demo"), Position::QB, "passYds")
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tier, "High");
    assert_eq!(rows[0].count, 2);
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:3000/api/proxy/");
    assert_eq!(client.base_url(), "http://localhost:3000/api/proxy");
}
