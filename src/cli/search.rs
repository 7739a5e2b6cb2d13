use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use super::{
    display::{ListFormat, print_json, print_table},
    workspace::Workspace,
};

#[derive(Debug, Parser)]
pub struct Search {
    /// Text to look for
    query: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: ListFormat,
}

impl Search {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let ideas = Workspace::open(root).favorites().search(&self.query);

        match self.output {
            ListFormat::Json => print_json(&ideas)?,
            ListFormat::Table if ideas.is_empty() => {
                println!("No favourites match '{}'", self.query);
            }
            ListFormat::Table => print_table(&ideas),
        }

        Ok(())
    }
}
