use std::path::PathBuf;

use bookspark::{BookType, domain::options::display_genre};
use clap::Parser;
use tracing::instrument;

use super::{terminal::Colorize, workspace::Workspace};

#[derive(Debug, Parser)]
pub struct Genres {
    /// Only list genres for this book type
    #[arg(long = "type", value_name = "TYPE")]
    book_type: Option<BookType>,
}

impl Genres {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let workspace = Workspace::open(root);
        let templates = workspace.templates()?;

        let book_types = self
            .book_type
            .as_ref()
            .map_or(BookType::ALL, std::slice::from_ref);

        for book_type in book_types {
            println!("{}", book_type.key().strong());
            for genre in templates.genres(*book_type) {
                let marker = if genre == book_type.default_genre() {
                    " (default)".dim()
                } else {
                    String::new()
                };
                println!("  {genre:<20} {}{marker}", display_genre(genre));
            }
        }

        Ok(())
    }
}
