use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use super::{
    display::{ListFormat, print_json, print_table},
    workspace::Workspace,
};

#[derive(Debug, Parser)]
pub struct List {
    /// Show only the N most recently generated ideas
    #[arg(long, value_name = "N")]
    recent: Option<usize>,

    /// Show only ideas of this genre (display name, case-insensitive)
    #[arg(long)]
    genre: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: ListFormat,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let favorites = Workspace::open(root).favorites();

        let ideas = match (self.recent, &self.genre) {
            (None, None) => favorites.all(),
            (Some(count), None) => favorites.recent(count),
            (None, Some(genre)) => favorites.by_genre(genre),
            (Some(count), Some(genre)) => {
                let mut ideas = favorites.by_genre(genre);
                ideas.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
                ideas.truncate(count);
                ideas
            }
        };

        match self.output {
            ListFormat::Json => print_json(&ideas)?,
            ListFormat::Table if ideas.is_empty() => {
                println!("No favourites found. Save one with 'bookspark generate --save'.");
            }
            ListFormat::Table => print_table(&ideas),
        }

        Ok(())
    }
}
