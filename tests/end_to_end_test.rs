//! End-to-end tests: client -> proxy -> mock fallback -> adapters -> stores
//!
//! These spin the real proxy router on a loopback listener with an
//! unreachable backend, so every response comes from the fixture dataset,
//! and then drive the same client/store stack the CLI uses.

use std::sync::Arc;

use procompare::backend::ApiClient;
use procompare::proxy::{router, AppState, ProxyConfig, StaticMockStore, MOCK_PAGE_SIZE};
use procompare::session::{FavoritesStore, PlayersQuery, Session};
use procompare::storage::LocalStore;
use procompare::{PlayerId, Position};
use tempfile::tempdir;
use tokio::net::TcpListener;

/// A backend origin that refuses connections immediately.
const DEAD_BACKEND: &str = "http://127.0.0.1:1";

async fn spawn_proxy() -> String {
    let config = ProxyConfig {
        backend_url: Some(DEAD_BACKEND.to_string()),
        use_mock_data: true,
        ..ProxyConfig::default()
    };
    let app = router(AppState::new(config, Arc::new(StaticMockStore::default())));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/proxy")
}

#[tokio::test]
async fn test_listing_pages_accumulate_through_the_proxy() {
    let base_url = spawn_proxy().await;
    let mut query = PlayersQuery::new(ApiClient::new(base_url));

    query.fetch_page(1).await.unwrap();
    assert_eq!(query.players().len(), MOCK_PAGE_SIZE);
    assert!(query.has_more());

    // fixture set has 12 players: page 2 brings the remainder
    assert!(query.load_more().await.unwrap());
    assert_eq!(query.players().len(), 12);
    assert!(query.has_more());

    // page 3 is empty and ends the listing
    assert!(query.load_more().await.unwrap());
    assert_eq!(query.players().len(), 12);
    assert!(!query.has_more());
    assert!(!query.load_more().await.unwrap());
}

#[tokio::test]
async fn test_position_filter_through_the_proxy() {
    let base_url = spawn_proxy().await;
    let mut query = PlayersQuery::new(ApiClient::new(base_url));
    query.set_position_filter(Some(Position::QB));

    query.fetch_page(1).await.unwrap();
    assert_eq!(query.players().len(), 4);
    assert!(query
        .players()
        .iter()
        .all(|player| player.position == Position::QB));
}

#[tokio::test]
async fn test_compare_through_the_proxy() {
    let base_url = spawn_proxy().await;
    let query = PlayersQuery::new(ApiClient::new(base_url));

    let (left, right) = query
        .compare(&PlayerId::new("1"), &PlayerId::new("3"))
        .await
        .unwrap();
    assert_eq!(left.name, "Patrick Mahomes");
    assert_eq!(right.name, "Travis Kelce");
    assert_eq!(left.team, "Kansas City Chiefs");

    // an unknown id fails the comparison as a whole
    assert!(query
        .compare(&PlayerId::new("1"), &PlayerId::new("999"))
        .await
        .is_err());
}

#[tokio::test]
async fn test_favorites_flow_with_note_persistence() {
    let base_url = spawn_proxy().await;
    let dir = tempdir().unwrap();

    {
        let mut favorites = FavoritesStore::new(
            ApiClient::new(base_url.clone()),
            LocalStore::new(dir.path()),
            Session::authenticated("demo"),
        );

        // the fixture user starts with players 1 and 3
        favorites.refresh().await;
        assert!(favorites.error().is_none());
        assert_eq!(favorites.favorites().len(), 2);
        assert!(favorites.is_favorite(&PlayerId::new("1")));

        // toggling a newcomer on goes through the proxy's success echo
        let mut query = PlayersQuery::new(ApiClient::new(base_url.clone()));
        let newcomer = query.fetch_player(&PlayerId::new("2")).await.unwrap().clone();
        assert!(favorites.toggle(&newcomer).await.unwrap());
        assert_eq!(favorites.favorites().len(), 3);

        favorites
            .update_note(&PlayerId::new("1"), "playoff stack")
            .unwrap();
    }

    // a rebuilt store with an unreachable API falls back to the cache and
    // keeps both the toggled favorite and the note
    let mut favorites = FavoritesStore::new(
        ApiClient::new(DEAD_BACKEND),
        LocalStore::new(dir.path()),
        Session::authenticated("demo"),
    );
    favorites.refresh().await;

    assert!(favorites.error().is_some());
    assert_eq!(favorites.favorites().len(), 3);
    assert_eq!(favorites.get_note(&PlayerId::new("1")), "playoff stack");
}
