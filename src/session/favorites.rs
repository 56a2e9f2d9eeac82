//! Favorites and notes for the authenticated user.
//!
//! The backend owns the favorites relation; this store mirrors it into the
//! local store as a fallback cache and keeps per-player notes purely local
//! (notes never travel to the backend). Mutations wait for backend
//! confirmation before touching in-memory state; there is no optimistic
//! update and therefore nothing to roll back.
//!
//! Operations are not sequenced against each other. Two overlapping
//! toggles for the same user can race, and the last response to land wins
//! in local state.

use std::collections::BTreeMap;

use chrono::Local;
use tracing::warn;

use crate::adapters::{adapt_favorite_summary, adapt_player};
use crate::backend::ApiClient;
use crate::cli::types::{PlayerId, Position, Username};
use crate::error::{ProCompareError, Result};
use crate::model::{FavoriteSummary, Player};
use crate::storage::{favorites_key, notes_key, LocalStore};

use super::Session;


pub struct FavoritesStore {
    client: ApiClient,
    store: LocalStore,
    session: Session,
    favorites: Vec<Player>,
    notes: BTreeMap<String, String>,
    error: Option<String>,
    summary: Vec<FavoriteSummary>,
    summary_error: Option<String>,
}

impl FavoritesStore {
    pub fn new(client: ApiClient, store: LocalStore, session: Session) -> Self {
        Self {
            client,
            store,
            session,
            favorites: Vec::new(),
            notes: BTreeMap::new(),
            error: None,
            summary: Vec::new(),
            summary_error: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn favorites(&self) -> &[Player] {
        &self.favorites
    }

    /// Last fetch/mutation error, kept human-readable for display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> &[FavoriteSummary] {
        &self.summary
    }

    pub fn summary_error(&self) -> Option<&str> {
        self.summary_error.as_deref()
    }

    pub fn is_favorite(&self, id: &PlayerId) -> bool {
        self.favorites.iter().any(|player| player.id == *id)
    }

    /// Note text for a player, empty when none was saved.
    pub fn get_note(&self, id: &PlayerId) -> &str {
        self.notes
            .get(id.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Pull the favorites collection from the backend, merge local notes
    /// in, and refresh the fallback cache.
    ///
    /// Unauthenticated sessions just clear every collection. A failed fetch
    /// records the error and falls back to the cached collection; a corrupt
    /// cache entry is purged and treated as empty.
    pub async fn refresh(&mut self) {
        let Some(username) = self.session.username().cloned() else {
            self.favorites.clear();
            self.notes.clear();
            self.summary.clear();
            self.error = None;
            self.summary_error = None;
            return;
        };

        self.error = None;

        match self.client.get_user(&username).await {
            Ok(user) => {
                let notes = self.load_notes(&username);
                let favorites: Vec<Player> = user
                    .favorites
                    .iter()
                    .map(adapt_player)
                    .map(|player| apply_note(player, &notes))
                    .collect();

                if favorites.is_empty() {
                    if let Err(err) = self.store.remove(&favorites_key(&username)) {
                        warn!("failed to clear favorites cache for {username}: {err}");
                    }
                } else {
                    self.write_cache(&username, &favorites);
                }

                self.notes = notes;
                self.favorites = favorites;
            }
            Err(err) => {
                self.error = Some(err.to_string());

                let notes = self.load_notes(&username);
                let cached: Vec<Player> = self
                    .store
                    .get(&favorites_key(&username))
                    .unwrap_or_default();
                self.favorites = cached
                    .into_iter()
                    .map(|player| apply_note(player, &notes))
                    .collect();
                self.notes = notes;
            }
        }
    }

    /// Add a player to the favorites after backend confirmation.
    ///
    /// A player that is already a favorite is not appended twice; the
    /// pre-insert membership check keeps the collection duplicate-free.
    pub async fn add(&mut self, player: &Player) -> Result<()> {
        let username = self.require_login()?;
        self.error = None;

        if let Err(err) = self.client.add_favorite(&username, &player.id).await {
            self.error = Some(err.to_string());
            return Err(err);
        }

        if !self.is_favorite(&player.id) {
            let confirmed = apply_note(player.clone(), &self.notes);
            self.favorites.push(confirmed);
        }
        self.write_cache(&username, &self.favorites);
        Ok(())
    }

    /// Remove a player from the favorites after backend confirmation.
    pub async fn remove(&mut self, id: &PlayerId) -> Result<()> {
        let username = self.require_login()?;
        self.error = None;

        if let Err(err) = self.client.remove_favorite(&username, id).await {
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.favorites.retain(|player| player.id != *id);
        self.write_cache(&username, &self.favorites);
        Ok(())
    }

    /// Flip membership for a player; returns the new membership.
    pub async fn toggle(&mut self, player: &Player) -> Result<bool> {
        if self.is_favorite(&player.id) {
            self.remove(&player.id).await?;
            Ok(false)
        } else {
            self.add(player).await?;
            Ok(true)
        }
    }

    /// Save a free-text note for a player. Purely local: the note lands in
    /// the notes map and is mirrored, with a fresh update stamp, into the
    /// favorites collection and its cache.
    pub fn update_note(&mut self, id: &PlayerId, note: &str) -> Result<()> {
        let username = self.require_login()?;

        if self.notes.is_empty() {
            self.notes = self.load_notes(&username);
        }
        self.notes.insert(id.as_str().to_string(), note.to_string());
        if let Err(err) = self.store.put(&notes_key(&username), &self.notes) {
            warn!("failed to persist notes for {username}: {err}");
        }

        let stamped = Local::now().date_naive();
        for player in &mut self.favorites {
            if player.id == *id {
                *player = player.with_note(note, stamped);
            }
        }
        self.write_cache(&username, &self.favorites);
        Ok(())
    }

    /// Fetch the tier summary for a position + stat choice. Independent of
    /// the favorites collection, never cached, and re-issued on every call.
    pub async fn fetch_summary(
        &mut self,
        position: Position,
        stat: &str,
    ) -> Result<&[FavoriteSummary]> {
        let username = self.require_login()?;
        self.summary_error = None;
        self.summary.clear();

        match self.client.favorite_summary(&username, position, stat).await {
            Ok(rows) => {
                self.summary = rows.iter().map(adapt_favorite_summary).collect();
                Ok(&self.summary)
            }
            Err(err) => {
                self.summary_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn require_login(&self) -> Result<Username> {
        self.session
            .username()
            .cloned()
            .ok_or(ProCompareError::NotLoggedIn)
    }

    fn load_notes(&self, username: &Username) -> BTreeMap<String, String> {
        self.store.get(&notes_key(username)).unwrap_or_default()
    }

    fn write_cache(&self, username: &Username, favorites: &[Player]) {
        if let Err(err) = self.store.put(&favorites_key(username), &favorites) {
            warn!("failed to cache favorites for {username}: {err}");
        }
    }
}

fn apply_note(player: Player, notes: &BTreeMap<String, String>) -> Player {
    let note = notes.get(player.id.as_str()).cloned().unwrap_or_default();
    Player { note, ..player }
}
