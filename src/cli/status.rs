use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing::instrument;

use super::{terminal::Colorize, workspace::Workspace};

#[derive(Debug, Parser, Default)]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Status {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let workspace = Workspace::open(root);
        let favorites = workspace.favorites();
        let count = favorites.count();
        let capacity = favorites.capacity();
        let path = workspace.favorites_path();

        match self.output {
            OutputFormat::Json => {
                let output = json!({
                    "favorites": count,
                    "capacity": capacity,
                    "path": path,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if count == 0 {
                    println!("No favourites saved yet. Save one with 'bookspark generate --save'.");
                    return Ok(());
                }

                let summary = format!("{count} of {capacity} favourites saved");
                if count >= capacity {
                    println!("{}", summary.warning());
                    println!(
                        "{}",
                        "The store is full; saving another idea drops the oldest.".dim()
                    );
                } else {
                    println!("{}", summary.success());
                }
                println!("{} {}", "Stored in".dim(), path.display());
            }
        }

        Ok(())
    }
}
