//! Session context and the per-session data stores.
//!
//! Instead of a global auth context, every data-access component takes an
//! explicit [`Session`] at construction. Login is deliberately a stub: it
//! records a username and nothing else; there is no credential handling
//! anywhere in this crate.

pub mod favorites;
pub mod players;

pub use favorites::FavoritesStore;
pub use players::{Debouncer, PlayersQuery};

use crate::cli::types::Username;

/// Who, if anyone, is using the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<Username>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            username: Some(Username::new(username)),
        }
    }

    /// Record a username; no credentials are involved.
    pub fn login(&mut self, username: impl Into<String>) {
        self.username = Some(Username::new(username));
    }

    pub fn logout(&mut self) {
        self.username = None;
    }

    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}
