use std::{path::PathBuf, process};

use clap::Parser;
use dialoguer::Confirm;
use tracing::instrument;

use super::{terminal::Colorize, workspace::Workspace};

#[derive(Debug, Parser)]
pub struct Remove {
    /// The id of the favourite
    id: String,
}

impl Remove {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut favorites = Workspace::open(root).favorites();

        if favorites.remove(&self.id)? {
            println!("{}", format!("Removed {}", self.id).success());
        } else {
            println!("{}", format!("No favourite with id {}", self.id).warning());
        }

        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Clear {
    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,
}

impl Clear {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut favorites = Workspace::open(root).favorites();

        let count = favorites.count();
        if count == 0 {
            println!("No favourites to remove");
            return Ok(());
        }

        if !self.yes {
            let proceed = Confirm::new()
                .with_prompt(format!("Remove all {count} favourites?"))
                .default(false)
                .interact()?;
            if !proceed {
                println!("Cancelled");
                process::exit(130);
            }
        }

        favorites.clear()?;
        println!("{}", format!("Removed {count} favourites").success());
        Ok(())
    }
}
