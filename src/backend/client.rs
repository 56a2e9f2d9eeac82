//! REST client for the comparison backend.
//!
//! All requests go through the proxy base URL, so the client is equally at
//! home pointed at a local proxy (`http://localhost:3000/api/proxy`) or
//! straight at the backend origin. No retries happen at this layer; every
//! failure propagates to the caller as an error.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::cli::types::{PlayerId, Position, SortDir, Username};
use crate::error::{ProCompareError, Result};

#[cfg(test)]
mod tests;

/// Parameters for the paginated `/players` listing.
#[derive(Debug, Clone, Default)]
pub struct PlayerListRequest {
    /// 1-based page number; `0` is treated as page 1 by the backend.
    pub page: u32,
    /// Backend column to order by, e.g. `score` or `playerName`.
    pub order_by: Option<String>,
    pub order_dir: Option<SortDir>,
    /// Substring filter on player name.
    pub name: Option<String>,
    /// Substring filter on team name.
    pub team: Option<String>,
    pub position: Option<Position>,
}

impl PlayerListRequest {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.max(1).to_string())];
        if let Some(order_by) = &self.order_by {
            params.push(("orderBy", order_by.clone()));
        }
        if let Some(dir) = self.order_dir {
            params.push(("orderByDir", dir.as_param().to_string()));
        }
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(team) = &self.team {
            params.push(("team", team.clone()));
        }
        if let Some(position) = self.position {
            params.push(("position", position.to_string()));
        }
        params
    }
}

/// Parameters for the `/teams` listing.
#[derive(Debug, Clone, Default)]
pub struct TeamListRequest {
    pub name: Option<String>,
    pub order_by: Option<String>,
    pub order_dir: Option<SortDir>,
}

impl TeamListRequest {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(order_by) = &self.order_by {
            params.push(("orderBy", order_by.clone()));
        }
        if let Some(dir) = self.order_dir {
            params.push(("orderByDir", dir.as_param().to_string()));
        }
        params
    }
}

/// Thin typed wrapper over the backend REST surface.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and apply the shared response contract:
    /// 404 maps to [`ProCompareError::NotFound`], any other non-2xx to a
    /// status-coded error, and an empty body (204 or zero content-length)
    /// yields an empty JSON object instead of a parse attempt.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(ProCompareError::NotFound);
            }
            return Err(ProCompareError::Status {
                code: status.as_u16(),
            });
        }

        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(Value::Object(Default::default()));
        }

        Ok(response.json::<Value>().await?)
    }

    pub async fn list_players(
        &self,
        request: &PlayerListRequest,
    ) -> Result<Vec<super::types::BackendPlayer>> {
        let url = format!("{}/players", self.base_url);
        let value = self
            .execute(self.http.get(&url).query(&request.to_params()))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_player(&self, id: &PlayerId) -> Result<super::types::BackendPlayer> {
        let url = format!("{}/players/{}", self.base_url, id);
        let value = self.execute(self.http.get(&url)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch both players concurrently; the comparison fails as a whole if
    /// either lookup fails.
    pub async fn compare_players(
        &self,
        first: &PlayerId,
        second: &PlayerId,
    ) -> Result<(super::types::BackendPlayer, super::types::BackendPlayer)> {
        tokio::try_join!(self.get_player(first), self.get_player(second))
    }

    pub async fn list_teams(
        &self,
        request: &TeamListRequest,
    ) -> Result<Vec<super::types::BackendTeam>> {
        let url = format!("{}/teams", self.base_url);
        let value = self
            .execute(self.http.get(&url).query(&request.to_params()))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_team(&self, id: i64) -> Result<super::types::BackendTeam> {
        let url = format!("{}/teams/{}", self.base_url, id);
        let value = self.execute(self.http.get(&url)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_user(&self, username: &Username) -> Result<super::types::BackendUser> {
        let url = format!("{}/users/{}", self.base_url, username);
        let value = self.execute(self.http.get(&url)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create a user; the backend reads the username from a form field.
    pub async fn create_user(&self, username: &Username) -> Result<Value> {
        let url = format!("{}/users", self.base_url);
        self.execute(
            self.http
                .post(&url)
                .form(&[("username", username.as_str())]),
        )
        .await
    }

    pub async fn delete_user(&self, username: &Username) -> Result<Value> {
        let url = format!("{}/users/{}", self.base_url, username);
        self.execute(self.http.delete(&url)).await
    }

    pub async fn add_favorite(&self, username: &Username, player: &PlayerId) -> Result<Value> {
        let url = format!("{}/users/{}/favorites", self.base_url, username);
        self.execute(
            self.http
                .post(&url)
                .query(&[("playerID", player.as_str())]),
        )
        .await
    }

    pub async fn remove_favorite(&self, username: &Username, player: &PlayerId) -> Result<Value> {
        let url = format!("{}/users/{}/favorites/{}", self.base_url, username, player);
        self.execute(self.http.delete(&url)).await
    }

    pub async fn favorite_summary(
        &self,
        username: &Username,
        position: Position,
        stat: &str,
    ) -> Result<Vec<super::types::BackendFavoriteSummary>> {
        let url = format!("{}/users/{}/favorites/summary", self.base_url, username);
        let value = self
            .execute(
                self.http
                    .get(&url)
                    .query(&[("position", position.to_string().as_str()), ("stat", stat)]),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
