use std::{path::PathBuf, process};

use clap::Parser;
use tracing::instrument;

use super::{
    display::{OutputFormat, print_idea, print_json},
    workspace::Workspace,
};

#[derive(Debug, Parser)]
pub struct Show {
    /// The id of the favourite
    id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let Some(idea) = Workspace::open(root).favorites().get(&self.id) else {
            eprintln!("No favourite with id {}", self.id);
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => print_idea(&idea),
            OutputFormat::Json => print_json(&idea)?,
        }

        Ok(())
    }
}
