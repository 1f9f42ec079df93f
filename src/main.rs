mod client;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tripmatch_core::{DateRange, PlanDraft};

use crate::client::{Client, DEFAULT_SERVER_URL};

#[derive(Parser)]
#[command(name = "tripmatch")]
#[command(about = "Publish your travel dates and find people around at the same time")]
struct Cli {
    /// Base URL of the tripmatch server
    #[arg(long, global = true, env = "TRIPMATCH_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every published plan
    List {
        /// Your start date (YYYY-MM-DD); overlapping plans are marked
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Your end date (YYYY-MM-DD)
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
    /// Publish a plan
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        city: String,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day of the trip (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// WeChat ID, phone number, ...
        #[arg(long)]
        contact: Option<String>,

        /// Not looking for a game this time
        #[arg(long)]
        no_play: bool,

        #[arg(long)]
        note: Option<String>,
    },
    /// Show plans overlapping the given dates
    Matches {
        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    match cli.command {
        Commands::List { start, end } => {
            let draft = match (start, end) {
                (Some(start), Some(end)) => Some(DateRange::parse(&start, &end)?),
                _ => None,
            };
            commands::list::run(&client, draft).await
        }
        Commands::Add {
            name,
            city,
            start,
            end,
            contact,
            no_play,
            note,
        } => {
            let draft = PlanDraft {
                name: Some(name),
                city: Some(city),
                start_date: Some(start),
                end_date: Some(end),
                contact,
                want_play: Some(!no_play),
                note,
            };
            commands::add::run(&client, draft).await
        }
        Commands::Matches { start, end } => {
            let range = DateRange::parse(&start, &end)?;
            commands::matches::run(&client, range).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_dates_must_come_together() {
        assert!(Cli::try_parse_from(["tripmatch", "list", "--start", "2026-02-14"]).is_err());
        assert!(
            Cli::try_parse_from(["tripmatch", "list", "--start", "2026-02-14", "--end", "2026-02-20"]).is_ok()
        );
    }

    #[test]
    fn test_add_defaults() {
        let cli = Cli::try_parse_from([
            "tripmatch", "add", "--name", "Mei", "--city", "Xiamen", "--start", "2026-02-14", "--end",
            "2026-02-16",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { no_play, contact, .. } => {
                assert!(!no_play);
                assert!(contact.is_none());
            }
            _ => panic!("expected add"),
        }
    }
}
