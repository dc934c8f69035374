//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

use grocer_api::{ApiClient, ApiConfig};

pub mod item;
pub mod list;
pub mod shared;

/// Grocer - shared grocery lists from the terminal
#[derive(Parser)]
#[command(name = "grocer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the list API
    #[arg(
        long,
        global = true,
        env = "GROCER_API_URL",
        default_value = grocer_api::DEFAULT_API_URL
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage shopping lists
    #[command(subcommand)]
    List(list::ListCommands),

    /// Manage items on a list
    #[command(subcommand)]
    Item(item::ItemCommands),

    /// Work with lists shared by code
    #[command(subcommand)]
    Shared(shared::SharedCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        tracing::debug!(api_url = %self.api_url, "API client configured");
        let client = ApiClient::new(ApiConfig::with_url(self.api_url));

        match self.command {
            Commands::List(cmd) => list::execute(cmd, &client).await,
            Commands::Item(cmd) => item::execute(cmd, &client).await,
            Commands::Shared(cmd) => shared::execute(cmd, &client).await,
        }
    }
}
