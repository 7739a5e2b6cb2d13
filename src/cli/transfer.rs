use std::{fs, path::PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::instrument;

use super::{terminal::Colorize, workspace::Workspace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    #[default]
    Json,
    Text,
    Html,
}

#[derive(Debug, Parser)]
pub struct Export {
    /// Export format
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

impl Export {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let favorites = Workspace::open(root).favorites();
        let today = Local::now().date_naive();

        let content = match self.format {
            Format::Json => favorites.export_json(),
            Format::Text => bookspark::export::text(&favorites.all(), today),
            Format::Html => bookspark::export::html(&favorites.all(), today),
        };

        match &self.out {
            Some(path) => {
                fs::write(path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!(
                    "{}",
                    format!("Exported {} favourites to {}", favorites.count(), path.display())
                        .success()
                );
            }
            None if content.ends_with('\n') => print!("{content}"),
            None => println!("{content}"),
        }

        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Import {
    /// A JSON file produced by `bookspark export` or the web application
    file: PathBuf,
}

impl Import {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let json = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let mut favorites = Workspace::open(root).favorites();
        let imported = favorites
            .import_json(&json)
            .with_context(|| format!("Failed to import {}", self.file.display()))?;

        println!(
            "{}",
            format!("Imported {imported} ideas; {} favourites saved", favorites.count()).success()
        );
        Ok(())
    }
}
