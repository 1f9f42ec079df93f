use anyhow::Result;
use owo_colors::OwoColorize;
use tripmatch_core::DateRange;

use crate::client::Client;
use crate::render::{Render, pluralize};

/// Print every published plan, marking those that overlap `draft`.
pub async fn run(client: &Client, draft: Option<DateRange>) -> Result<()> {
    let plans = client.list_plans().await?;

    if plans.is_empty() {
        println!("{}", "No plans published yet".dimmed());
        return Ok(());
    }

    let mut matched = 0;
    for plan in &plans {
        let is_match = draft.as_ref().is_some_and(|range| plan.matches(range));
        if is_match {
            matched += 1;
            println!("{} {}", "✨".yellow(), plan.render());
        } else {
            println!("   {}", plan.render());
        }
        println!();
    }

    let summary = format!("{} {}", plans.len(), pluralize("plan", plans.len() as i64));
    match draft {
        Some(_) => println!("{}, {} matching your dates", summary.bold(), matched.to_string().green()),
        None => println!("{}", summary.bold()),
    }

    Ok(())
}
