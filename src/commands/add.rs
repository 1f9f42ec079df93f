use anyhow::Result;
use owo_colors::OwoColorize;
use tripmatch_core::PlanDraft;

use crate::client::Client;
use crate::render::Render;

pub async fn run(client: &Client, draft: PlanDraft) -> Result<()> {
    // Validate locally first so bad input never reaches the server
    draft.validate()?;

    let plan = client.create_plan(&draft).await?;

    println!("{} Published plan {}", "✓".green(), plan.id.dimmed());
    println!("{}", plan.render());

    Ok(())
}
