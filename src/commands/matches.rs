use anyhow::Result;
use owo_colors::OwoColorize;
use tripmatch_core::DateRange;

use crate::client::Client;
use crate::render::{Render, pluralize};

/// Ask the server for plans overlapping `range`.
pub async fn run(client: &Client, range: DateRange) -> Result<()> {
    let plans = client.matching_plans(&range).await?;

    if plans.is_empty() {
        println!(
            "{}",
            format!("Nobody is around between {} and {}", range.start(), range.end()).dimmed()
        );
        return Ok(());
    }

    for plan in &plans {
        println!("{}\n", plan.render());
    }
    println!(
        "{}",
        format!("{} {}", plans.len(), pluralize("match", plans.len() as i64)).bold()
    );

    Ok(())
}
