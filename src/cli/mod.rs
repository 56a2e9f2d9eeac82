//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{PlayerId, Position, SortDir};

/// Listing filters shared by player-listing commands.
#[derive(Debug, Args)]
pub struct ListingFilters {
    /// Page number (1-based); pages accumulate with `--page 2`, `--page 3`, ...
    #[clap(long, default_value_t = 1)]
    pub page: u32,

    /// Filter by position: QB, RB, WR, or TE.
    #[clap(short = 'p', long = "position")]
    pub position: Option<Position>,

    /// Substring filter on player name.
    #[clap(long, short = 'n')]
    pub name: Option<String>,

    /// Substring filter on team name.
    #[clap(long, short = 't')]
    pub team: Option<String>,

    /// Backend column to sort by, e.g. `score` or `playerName`.
    #[clap(long)]
    pub sort: Option<String>,

    /// Sort direction (ASC or DESC).
    #[clap(long)]
    pub dir: Option<SortDir>,
}

/// Identity for commands acting on a user's data.
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Username (or set `PROCOMPARE_USER`).
    #[clap(long, short)]
    pub username: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List players with paging, filtering, and sorting.
    Players {
        #[clap(flatten)]
        filters: ListingFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Get a single player by id.
    Player {
        id: PlayerId,

        /// Output the player as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams, strongest first by default.
    Teams {
        /// Substring filter on team name.
        #[clap(long, short = 'n')]
        name: Option<String>,

        /// Backend column to sort by, e.g. `teamStrength`.
        #[clap(long)]
        sort: Option<String>,

        /// Sort direction (ASC or DESC).
        #[clap(long)]
        dir: Option<SortDir>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Get a single team with its top player per position.
    Team {
        id: i64,

        /// Output the team as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCmd {
    /// List the user's favorites with their notes.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Add a player to the favorites.
    Add { id: PlayerId },

    /// Remove a player from the favorites.
    Remove { id: PlayerId },

    /// Toggle membership for a player.
    Toggle { id: PlayerId },

    /// Save a local note for a player (never sent to the backend).
    Note { id: PlayerId, text: String },

    /// Tier summary of favorites for a position + stat choice.
    Summary {
        #[clap(short = 'p', long)]
        position: Position,

        /// Backend stat name, e.g. `passYds`.
        #[clap(short = 's', long)]
        stat: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCmd {
    /// Create a backend user.
    Create { username: String },

    /// Delete a backend user and their favorites.
    Delete { username: String },
}

#[derive(Debug, Parser)]
#[clap(name = "procompare", about = "NFL player comparison dashboard CLI")]
pub struct ProCompare {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the reverse proxy service.
    Serve {
        /// Port to bind (or set `PROCOMPARE_PORT`).
        #[clap(long, short)]
        port: Option<u16>,
    },

    /// Get data from the comparison backend.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Compare two players head-to-head.
    Compare {
        first: PlayerId,
        second: PlayerId,

        /// Output the pair as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Manage a user's favorites and notes.
    Favorites {
        #[clap(flatten)]
        auth: AuthArgs,

        #[clap(subcommand)]
        cmd: FavoritesCmd,
    },

    /// Create or delete backend users.
    User {
        #[clap(subcommand)]
        cmd: UserCmd,
    },
}
