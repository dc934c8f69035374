//! Shopping list commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use grocer_api::ApiClient;
use grocer_core::{group_by_category, ListStats};

use crate::output;

#[derive(Subcommand)]
pub enum ListCommands {
    /// Create a new shopping list
    New(NewListArgs),

    /// Show a list's items, grouped by category
    Show(ShowListArgs),
}

#[derive(Args)]
pub struct NewListArgs {
    /// List name
    pub name: String,
}

#[derive(Args)]
pub struct ShowListArgs {
    /// List ID
    pub list_id: String,
}

pub async fn execute(cmd: ListCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        ListCommands::New(args) => {
            let list = client
                .create_list(&args.name)
                .await
                .context("Failed to create list")?;

            println!(
                "{} Created list: {} ({})",
                "✓".green().bold(),
                list.name.cyan(),
                list.id.dimmed()
            );
            println!("  Share code: {}", list.share_code.cyan().bold());
            println!();
            println!("{}", "Next steps:".bold());
            println!("  grocer item add {} <name>   # Add an item", list.id);
            println!(
                "  grocer shared show {}        # View it the way others do",
                list.share_code
            );
        }

        ListCommands::Show(args) => {
            let items = client
                .list_items(&args.list_id)
                .await
                .context("Failed to fetch items")?;

            let stats = ListStats::for_items(&items);
            output::print_grouped(&group_by_category(&items), stats);
        }
    }

    Ok(())
}
