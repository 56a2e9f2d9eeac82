//! Common utilities shared across command handlers.

use std::env;

use crate::{
    backend::ApiClient,
    cli::types::Username,
    error::{ProCompareError, Result},
    proxy::config::DEFAULT_PORT,
    session::{FavoritesStore, PlayersQuery, Session},
    storage::LocalStore,
    API_URL_ENV_VAR, USER_ENV_VAR,
};

/// Base URL the CLI talks to: `PROCOMPARE_API_URL` or the local proxy.
pub fn resolve_api_url() -> String {
    env::var(API_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| format!("http://localhost:{DEFAULT_PORT}/api/proxy"))
}

/// Username from the flag, falling back to `PROCOMPARE_USER`.
pub fn resolve_username(explicit: Option<String>) -> Result<Username> {
    if let Some(username) = explicit.filter(|u| !u.trim().is_empty()) {
        return Ok(Username::new(username));
    }
    match env::var(USER_ENV_VAR) {
        Ok(username) if !username.trim().is_empty() => Ok(Username::new(username)),
        _ => Err(ProCompareError::MissingUsername {
            env_var: USER_ENV_VAR.to_string(),
        }),
    }
}

/// Context containing the resources most commands need.
pub struct CommandContext {
    pub client: ApiClient,
    pub session: Session,
}

impl CommandContext {
    pub fn new(username: Option<Username>) -> Self {
        let session = match username {
            Some(username) => Session::authenticated(username.as_str()),
            None => Session::anonymous(),
        };
        Self {
            client: ApiClient::new(resolve_api_url()),
            session,
        }
    }

    pub fn players_query(&self) -> PlayersQuery {
        PlayersQuery::new(self.client.clone())
    }

    pub fn favorites_store(&self) -> FavoritesStore {
        FavoritesStore::new(
            self.client.clone(),
            LocalStore::open_default(),
            self.session.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_username_precedence() {
        // one test body so the env var mutations cannot race each other
        env::remove_var(USER_ENV_VAR);

        let username = resolve_username(Some("ana".to_string())).unwrap();
        assert_eq!(username.as_str(), "ana");

        let err = resolve_username(None).unwrap_err();
        match err {
            ProCompareError::MissingUsername { env_var } => {
                assert_eq!(env_var, USER_ENV_VAR);
            }
            _ => panic!("Expected MissingUsername error"),
        }

        env::set_var(USER_ENV_VAR, "bo");
        assert_eq!(resolve_username(None).unwrap().as_str(), "bo");
        // the flag still wins over the environment
        assert_eq!(
            resolve_username(Some("ana".to_string())).unwrap().as_str(),
            "ana"
        );
        env::remove_var(USER_ENV_VAR);
    }

    #[test]
    fn test_resolve_api_url_default() {
        env::remove_var(API_URL_ENV_VAR);
        assert_eq!(resolve_api_url(), "http://localhost:3000/api/proxy");
    }
}
