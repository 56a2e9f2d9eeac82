//! Paginated, sorted, filtered player listings and single-entity lookups.
//!
//! The query owns its debounce/supersession primitive rather than leaving
//! it to callers: a search that is superseded while waiting on the timer or
//! while its request is in flight discards its response instead of
//! clobbering newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use crate::adapters::{adapt_player, adapt_team};
use crate::backend::{ApiClient, PlayerListRequest, TeamListRequest};
use crate::cli::types::{PlayerId, Position, SortDir};
use crate::error::Result;
use crate::model::{Player, Team};


/// Delay applied to debounced searches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancellable-timer primitive with request supersession.
///
/// Every [`begin`](Debouncer::begin) bumps a monotonically increasing
/// request id, so an older ticket observes that it has been superseded and
/// can drop its work, both before and after the network round trip.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Claim the next request id, superseding every outstanding ticket.
    pub fn begin(&self) -> DebounceTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            id,
            delay: self.delay,
            generation: Arc::clone(&self.generation),
        }
    }
}

#[derive(Debug)]
pub struct DebounceTicket {
    id: u64,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl DebounceTicket {
    /// Wait out the debounce delay.
    pub async fn wait(&self) {
        sleep(self.delay).await;
    }

    /// Whether this ticket still owns the latest request id.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}

pub struct PlayersQuery {
    client: ApiClient,
    players: Vec<Player>,
    page: u32,
    has_more: bool,
    order_by: Option<String>,
    order_dir: Option<SortDir>,
    search_text: Option<String>,
    team_filter: Option<String>,
    position_filter: Option<Position>,
    player: Option<Player>,
    player_error: Option<String>,
    team: Option<Team>,
    team_error: Option<String>,
    error: Option<String>,
    debouncer: Debouncer,
}

impl PlayersQuery {
    pub fn new(client: ApiClient) -> Self {
        Self::with_debounce(client, SEARCH_DEBOUNCE)
    }

    /// Mainly for tests, which do not want to wait 300ms per search.
    pub fn with_debounce(client: ApiClient, delay: Duration) -> Self {
        Self {
            client,
            players: Vec::new(),
            page: 1,
            has_more: true,
            order_by: None,
            order_dir: None,
            search_text: None,
            team_filter: None,
            position_filter: None,
            player: None,
            player_error: None,
            team: None,
            team_error: None,
            error: None,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last listing/search error, kept human-readable for display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Single-player slot filled by [`fetch_player`](Self::fetch_player).
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Error slot owned by the single-player fetch.
    pub fn player_error(&self) -> Option<&str> {
        self.player_error.as_deref()
    }

    /// Single-team slot filled by [`fetch_team`](Self::fetch_team).
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// Error slot owned by the single-team fetch.
    pub fn team_error(&self) -> Option<&str> {
        self.team_error.as_deref()
    }

    pub fn set_position_filter(&mut self, position: Option<Position>) {
        self.position_filter = position;
    }

    pub fn set_team_filter(&mut self, team: Option<String>) {
        self.team_filter = team;
    }

    pub fn set_sort(&mut self, field: Option<String>, dir: Option<SortDir>) {
        self.order_by = field;
        self.order_dir = dir;
    }

    /// Sort by `field`; selecting the current field again flips the
    /// direction, a new field starts descending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.order_by.as_deref() == Some(field) {
            self.order_dir = Some(self.order_dir.unwrap_or(SortDir::Desc).toggled());
        } else {
            self.order_by = Some(field.to_string());
            self.order_dir = Some(SortDir::Desc);
        }
    }

    pub fn sort(&self) -> (Option<&str>, Option<SortDir>) {
        (self.order_by.as_deref(), self.order_dir)
    }

    /// Fetch one page of the listing. Page 1 replaces the accumulated
    /// collection, later pages append; `has_more` stays set as long as the
    /// page came back non-empty (the backend sends no total count).
    pub async fn fetch_page(&mut self, page: u32) -> Result<&[Player]> {
        self.error = None;
        let request = self.request_for_page(page);

        match self.client.list_players(&request).await {
            Ok(rows) => {
                let adapted: Vec<Player> = rows.iter().map(adapt_player).collect();
                self.apply_page(page, adapted);
                Ok(&self.players)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch the next page if the last one was non-empty; returns whether a
    /// request was issued.
    pub async fn load_more(&mut self) -> Result<bool> {
        if !self.has_more {
            return Ok(false);
        }
        self.fetch_page(self.page + 1).await?;
        Ok(true)
    }

    /// Debounced free-text search over page 1.
    ///
    /// Returns `Ok(None)` when this search was superseded by a newer one
    /// (either during the debounce window or while the request was in
    /// flight) and its response was discarded.
    pub async fn search(&mut self, text: &str) -> Result<Option<&[Player]>> {
        let text = text.trim();
        self.search_text = (!text.is_empty()).then(|| text.to_string());

        let ticket = self.debouncer.begin();
        ticket.wait().await;
        if !ticket.is_current() {
            return Ok(None);
        }

        let request = self.request_for_page(1);
        match self.client.list_players(&request).await {
            Ok(rows) => {
                if !ticket.is_current() {
                    return Ok(None);
                }
                let adapted: Vec<Player> = rows.iter().map(adapt_player).collect();
                self.apply_page(1, adapted);
                Ok(Some(&self.players))
            }
            Err(err) => {
                if !ticket.is_current() {
                    return Ok(None);
                }
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn fetch_player(&mut self, id: &PlayerId) -> Result<&Player> {
        self.player_error = None;
        match self.client.get_player(id).await {
            Ok(row) => Ok(self.player.insert(adapt_player(&row))),
            Err(err) => {
                self.player_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub async fn fetch_team(&mut self, id: i64) -> Result<&Team> {
        self.team_error = None;
        match self.client.get_team(id).await {
            Ok(row) => Ok(self.team.insert(adapt_team(&row))),
            Err(err) => {
                self.team_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// List teams with an optional name filter, sorted like the backend
    /// sorts them (strength descending by default).
    pub async fn fetch_teams(&self, request: &TeamListRequest) -> Result<Vec<Team>> {
        let rows = self.client.list_teams(request).await?;
        Ok(rows.iter().map(adapt_team).collect())
    }

    /// Head-to-head lookup: both fetches run concurrently and the
    /// comparison fails as a whole if either player is missing.
    pub async fn compare(&self, first: &PlayerId, second: &PlayerId) -> Result<(Player, Player)> {
        let (a, b) = self.client.compare_players(first, second).await?;
        Ok((adapt_player(&a), adapt_player(&b)))
    }

    fn apply_page(&mut self, page: u32, adapted: Vec<Player>) {
        self.has_more = !adapted.is_empty();
        if page <= 1 {
            self.players = adapted;
        } else {
            self.players.extend(adapted);
        }
        self.page = page.max(1);
    }

    fn request_for_page(&self, page: u32) -> PlayerListRequest {
        PlayerListRequest {
            page,
            order_by: self.order_by.clone(),
            order_dir: self.order_dir,
            name: self.search_text.clone(),
            team: self.team_filter.clone(),
            position: self.position_filter,
        }
    }
}
