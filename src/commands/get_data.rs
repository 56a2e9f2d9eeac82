//! `procompare get ...`: listing and single-entity lookups.

use crate::backend::TeamListRequest;
use crate::cli::types::PlayerId;
use crate::cli::ListingFilters;
use crate::error::Result;
use crate::model::Player;

use super::common::CommandContext;

pub async fn handle_players(filters: ListingFilters, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(None);
    let mut query = ctx.players_query();

    query.set_position_filter(filters.position);
    query.set_team_filter(filters.team);
    query.set_sort(filters.sort.clone(), filters.dir);
    if let Some(name) = &filters.name {
        query.search(name).await?;
        if filters.page > 1 {
            query.fetch_page(filters.page).await?;
        }
    } else {
        // accumulate pages 1..=page, the way the dashboard's "load more" does
        for page in 1..=filters.page.max(1) {
            query.fetch_page(page).await?;
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(query.players())?);
    } else {
        for player in query.players() {
            print_player_line(player);
        }
        if query.has_more() {
            println!("... more available (--page {})", query.page() + 1);
        }
    }
    Ok(())
}

pub async fn handle_player(id: PlayerId, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(None);
    let mut query = ctx.players_query();
    let player = query.fetch_player(&id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(player)?);
    } else {
        print_player_detail(player);
    }
    Ok(())
}

pub async fn handle_teams(request: TeamListRequest, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(None);
    let teams = ctx.players_query().fetch_teams(&request).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
    } else {
        for team in &teams {
            println!(
                "{:>4}  {:<4} {:<28} strength {:.2}",
                team.id, team.code, team.name, team.strength
            );
        }
    }
    Ok(())
}

pub async fn handle_team(id: i64, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(None);
    let mut query = ctx.players_query();
    let team = query.fetch_team(id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(team)?);
    } else {
        println!(
            "{} ({})  strength {:.2}",
            team.name, team.code, team.strength
        );
        print_top_player("QB", team.top_qb.as_deref());
        print_top_player("RB", team.top_rb.as_deref());
        print_top_player("WR", team.top_wr.as_deref());
        print_top_player("TE", team.top_te.as_deref());
    }
    Ok(())
}

fn print_top_player(label: &str, player: Option<&Player>) {
    match player {
        Some(player) => println!("  top {label}: {} (score {})", player.name, player.ml_score),
        None => println!("  top {label}: -"),
    }
}

pub(crate) fn print_player_line(player: &Player) {
    println!(
        "{:<12} {:<24} {:<3} {:<24} {:>4} {:>5}",
        player.id, player.name, player.position, player.team, player.ml_score, player.trend
    );
}

pub(crate) fn print_player_detail(player: &Player) {
    println!("{} ({}, {})", player.name, player.position, player.team);
    println!("  ML score: {} (trend {})", player.ml_score, player.trend);
    if let Some(age) = player.age {
        println!("  age: {age}");
    }
    if let (Some(seasons), Some(games)) = (player.num_seasons, player.num_games) {
        println!("  seasons: {seasons}, games: {games}");
    }
    for (stat, value) in &player.stats {
        println!("  {stat}: {value}");
    }
    if !player.note.is_empty() {
        println!("  note: {}", player.note);
    }
}
