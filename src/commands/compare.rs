//! `procompare compare`: head-to-head comparison of two players.

use std::collections::BTreeSet;

use crate::cli::types::PlayerId;
use crate::error::Result;

use super::common::CommandContext;

pub async fn handle_compare(first: PlayerId, second: PlayerId, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(None);
    let (left, right) = ctx.players_query().compare(&first, &second).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&[&left, &right])?);
        return Ok(());
    }

    println!(
        "{:<24} {:>10}   {:<24} {:>10}",
        left.name, left.ml_score, right.name, right.ml_score
    );
    println!(
        "{:<24} {:>10}   {:<24} {:>10}",
        left.team,
        left.trend.to_string(),
        right.team,
        right.trend.to_string()
    );
    println!();

    // union of both stat sets so one-sided stats still show
    let stats: BTreeSet<&str> = left
        .stats
        .keys()
        .chain(right.stats.keys())
        .map(String::as_str)
        .collect();
    for stat in stats {
        let left_value = left.stats.get(stat).copied().unwrap_or(0.0);
        let right_value = right.stats.get(stat).copied().unwrap_or(0.0);
        println!("{stat:<20} {left_value:>10.1} vs {right_value:>10.1}");
    }
    Ok(())
}
