//! Shared list commands: resolve a share code, or watch one live.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use grocer_api::{ApiClient, SharedListWatcher, WatchEvent, DEFAULT_POLL_INTERVAL};
use grocer_core::{group_by_category, ListStats};

use crate::output;

#[derive(Subcommand)]
pub enum SharedCommands {
    /// Show a shared list once
    Show(SharedArgs),

    /// Watch a shared list, refreshing at a fixed interval
    Watch(WatchArgs),
}

#[derive(Args)]
pub struct SharedArgs {
    /// Share code
    pub share_code: String,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Share code
    pub share_code: String,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub interval: u64,
}

pub async fn execute(cmd: SharedCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        SharedCommands::Show(args) => {
            let list = client
                .get_list_by_share_code(&args.share_code)
                .await
                .context("Failed to resolve share code")?;
            let items = client
                .list_items(&list.id)
                .await
                .context("Failed to fetch items")?;

            output::print_list_header(&list);
            output::print_grouped(&group_by_category(&items), ListStats::for_items(&items));
        }

        SharedCommands::Watch(args) => {
            let every = Duration::from_secs(args.interval.max(1));
            let (watcher, mut events) =
                SharedListWatcher::spawn(client.clone(), args.share_code.clone(), every);

            println!(
                "{} Watching {} every {}s. Press Ctrl-C to stop.",
                "→".blue().bold(),
                args.share_code.cyan(),
                every.as_secs()
            );

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    event = events.recv() => {
                        match event {
                            Some(WatchEvent::Updated(snapshot)) => {
                                println!();
                                output::print_list_header(&snapshot.list);
                                output::print_grouped(
                                    &group_by_category(&snapshot.items),
                                    ListStats::for_items(&snapshot.items),
                                );
                            }
                            Some(WatchEvent::Failed(e)) => {
                                println!("{} Refresh failed: {}", "⚠".yellow().bold(), e);
                            }
                            None => break,
                        }
                    }
                }
            }

            watcher.stop().await;
            println!("{} Stopped watching", "✓".green().bold());
        }
    }

    Ok(())
}
