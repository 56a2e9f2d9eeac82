//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use procompare::{
    cli::{Commands, GetCmd, ProCompare},
    commands::{
        compare::handle_compare,
        favorites::handle_favorites,
        get_data::{handle_player, handle_players, handle_team, handle_teams},
        resolve_username,
        serve::handle_serve,
        user::handle_user,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = ProCompare::parse();

    match app.command {
        Commands::Serve { port } => handle_serve(port).await?,

        Commands::Get { cmd } => match cmd {
            GetCmd::Players { filters, json } => handle_players(filters, json).await?,

            GetCmd::Player { id, json } => handle_player(id, json).await?,

            GetCmd::Teams {
                name,
                sort,
                dir,
                json,
            } => {
                handle_teams(
                    procompare::backend::TeamListRequest {
                        name,
                        order_by: sort,
                        order_dir: dir,
                    },
                    json,
                )
                .await?
            }

            GetCmd::Team { id, json } => handle_team(id, json).await?,
        },

        Commands::Compare {
            first,
            second,
            json,
        } => handle_compare(first, second, json).await?,

        Commands::Favorites { auth, cmd } => {
            let username = resolve_username(auth.username)?;
            handle_favorites(username, cmd).await?
        }

        Commands::User { cmd } => handle_user(cmd).await?,
    }

    Ok(())
}
