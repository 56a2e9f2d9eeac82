//! `procompare favorites ...`: favorites and notes for one user.

use crate::cli::types::{PlayerId, Position, Username};
use crate::cli::FavoritesCmd;
use crate::error::Result;

use super::common::CommandContext;
use super::get_data::print_player_line;

pub async fn handle_favorites(username: Username, cmd: FavoritesCmd) -> Result<()> {
    let ctx = CommandContext::new(Some(username));
    let mut store = ctx.favorites_store();

    // every subcommand starts from the synced collection; on backend
    // failure this silently falls back to the local cache
    store.refresh().await;
    if let Some(error) = store.error() {
        eprintln!("warning: {error} (using locally cached favorites)");
    }

    match cmd {
        FavoritesCmd::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.favorites())?);
            } else {
                for player in store.favorites() {
                    print_player_line(player);
                    if !player.note.is_empty() {
                        println!("{:>14} note: {}", "", player.note);
                    }
                }
                println!("{} favorite(s)", store.favorites().len());
            }
        }
        FavoritesCmd::Add { id } => {
            let player = fetch_for_mutation(&ctx, &id).await?;
            store.add(&player).await?;
            println!("Added {} to favorites", player.name);
        }
        FavoritesCmd::Remove { id } => {
            store.remove(&id).await?;
            println!("Removed {id} from favorites");
        }
        FavoritesCmd::Toggle { id } => {
            let player = fetch_for_mutation(&ctx, &id).await?;
            let now_member = store.toggle(&player).await?;
            if now_member {
                println!("Added {} to favorites", player.name);
            } else {
                println!("Removed {} from favorites", player.name);
            }
        }
        FavoritesCmd::Note { id, text } => {
            store.update_note(&id, &text)?;
            println!("Saved note for {id}");
        }
        FavoritesCmd::Summary {
            position,
            stat,
            json,
        } => {
            print_summary(&mut store, position, &stat, json).await?;
        }
    }
    Ok(())
}

async fn fetch_for_mutation(
    ctx: &CommandContext,
    id: &PlayerId,
) -> Result<crate::model::Player> {
    let mut query = ctx.players_query();
    query.fetch_player(id).await.map(|player| player.clone())
}

async fn print_summary(
    store: &mut crate::session::FavoritesStore,
    position: Position,
    stat: &str,
    as_json: bool,
) -> Result<()> {
    let rows = store.fetch_summary(position, stat).await?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("{position} by {stat}:");
        for row in rows {
            println!("  {:<6} {}", row.tier, row.count);
        }
    }
    Ok(())
}
