//! ProCompare CLI Library
//!
//! A Rust library for the ProCompare NFL player comparison dashboard,
//! providing the backend API client, data adapters, a reverse proxy with
//! mock fallback, and locally cached favorites/notes state.
//!
//! ## Features
//!
//! - **Player Data Retrieval**: Paginated, filtered, sorted player listings
//!   from the comparison backend
//! - **Head-to-Head Comparison**: Concurrent two-player lookups
//! - **Reverse Proxy**: Forwards dashboard requests to the backend and
//!   falls back to fixture data when the backend is unreachable
//! - **Favorites & Notes**: Per-user favorites synchronized with the
//!   backend and mirrored into a local cache, with purely local notes
//! - **Adapters**: Normalization of backend stat rows into display shapes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use procompare::backend::{ApiClient, PlayerListRequest};
//! use procompare::adapters::adapt_player;
//!
//! # async fn example() -> procompare::Result<()> {
//! let client = ApiClient::new("http://localhost:3000/api/proxy");
//! let rows = client.list_players(&PlayerListRequest::page(1)).await?;
//! for row in &rows {
//!     let player = adapt_player(row);
//!     println!("{} ({}) {}", player.name, player.position, player.ml_score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The proxy reads its backend origin and mock flag from the environment:
//! ```bash
//! export BACKEND_URL=http://localhost:8080
//! export USE_MOCK_DATA=true
//! ```

pub mod adapters;
pub mod backend;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod proxy;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, SortDir, Username};
pub use error::{ProCompareError, Result};
pub use model::{FavoriteSummary, News, Player, Team, Trend};

/// Backend origin the proxy forwards to.
pub const BACKEND_URL_ENV_VAR: &str = "BACKEND_URL";
/// Whether the proxy serves fixture data when the backend fails.
pub const USE_MOCK_DATA_ENV_VAR: &str = "USE_MOCK_DATA";
/// Port the proxy binds to.
pub const PORT_ENV_VAR: &str = "PROCOMPARE_PORT";
/// Base URL the CLI client talks to (defaults to the local proxy).
pub const API_URL_ENV_VAR: &str = "PROCOMPARE_API_URL";
/// Username the CLI acts as when none is passed explicitly.
pub const USER_ENV_VAR: &str = "PROCOMPARE_USER";
