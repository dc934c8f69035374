//! Item commands: add, check, uncheck, edit, remove.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use grocer_api::ApiClient;
use grocer_core::{parse_quantity, CreateItemRequest, UpdateItemRequest};

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a list
    Add(AddItemArgs),

    /// Mark an item as bought
    Check(ItemIdArg),

    /// Put an item back on the list
    Uncheck(ItemIdArg),

    /// Edit an item's fields
    Edit(EditItemArgs),

    /// Remove an item
    Remove(ItemIdArg),
}

#[derive(Args)]
pub struct AddItemArgs {
    /// List ID
    pub list_id: String,

    /// Item name
    pub name: String,

    /// Quantity; anything that is not a positive integer becomes 1
    #[arg(short, long, default_value = "1")]
    pub qty: String,
}

#[derive(Args)]
pub struct ItemIdArg {
    /// Item ID
    pub item_id: i64,
}

#[derive(Args)]
pub struct EditItemArgs {
    /// Item ID
    pub item_id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New quantity
    #[arg(long)]
    pub qty: Option<String>,

    /// New bought state (true or false)
    #[arg(long)]
    pub bought: Option<bool>,
}

pub async fn execute(cmd: ItemCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        ItemCommands::Add(args) => {
            let item = client
                .create_item(CreateItemRequest {
                    list_id: args.list_id,
                    name: args.name,
                    quantity: parse_quantity(&args.qty),
                })
                .await
                .context("Failed to add item")?;

            let category = if item.category.is_empty() {
                "Other"
            } else {
                item.category.as_str()
            };
            println!(
                "{} Added {} ×{} under {} ({})",
                "✓".green().bold(),
                item.name.cyan(),
                item.quantity,
                category.yellow(),
                format!("#{}", item.id).dimmed()
            );
        }

        ItemCommands::Check(args) => {
            let item = client
                .update_item(args.item_id, UpdateItemRequest::bought(true))
                .await
                .context("Failed to mark item as bought")?;
            println!(
                "{} {} marked as bought",
                "✓".green().bold(),
                item.name.cyan()
            );
        }

        ItemCommands::Uncheck(args) => {
            let item = client
                .update_item(args.item_id, UpdateItemRequest::bought(false))
                .await
                .context("Failed to mark item as not bought")?;
            println!(
                "{} {} back on the list",
                "✓".green().bold(),
                item.name.cyan()
            );
        }

        ItemCommands::Edit(args) => {
            let update = UpdateItemRequest {
                name: args.name,
                quantity: args.qty.as_deref().map(parse_quantity),
                bought: args.bought,
            };
            let item = client
                .update_item(args.item_id, update)
                .await
                .context("Failed to update item")?;
            println!(
                "{} Updated {} ×{} ({})",
                "✓".green().bold(),
                item.name.cyan(),
                item.quantity,
                format!("#{}", item.id).dimmed()
            );
        }

        ItemCommands::Remove(args) => {
            client
                .delete_item(args.item_id)
                .await
                .context("Failed to remove item")?;
            println!(
                "{} Item {} removed",
                "✓".green().bold(),
                format!("#{}", args.item_id).dimmed()
            );
        }
    }

    Ok(())
}
