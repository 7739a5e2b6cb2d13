use std::path::PathBuf;

use bookspark::{BookType, Generation, Generator, GeneratorOptions, Length, TargetAge, Tone};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tracing::instrument;

use super::{
    display::{OutputFormat, print_idea, print_json},
    terminal::Colorize,
    workspace::Workspace,
};

#[derive(Debug, Parser)]
pub struct Generate {
    /// Fiction or non-fiction
    #[arg(long = "type", value_name = "TYPE")]
    book_type: Option<BookType>,

    /// Genre key, e.g. `mystery` or `self-help` (see `bookspark genres`)
    #[arg(long)]
    genre: Option<String>,

    /// short-story, novella or novel
    #[arg(long)]
    length: Option<Length>,

    /// children, young-adult or adult
    #[arg(long = "age", value_name = "AGE")]
    target_age: Option<TargetAge>,

    /// light, serious, humorous or dark
    #[arg(long)]
    tone: Option<Tone>,

    /// Seed the random source for a reproducible idea
    #[arg(long)]
    seed: Option<u64>,

    /// Save the idea to favourites
    #[arg(long)]
    save: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Generate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let workspace = Workspace::open(root);
        let templates = workspace.templates()?;
        let options = self.options(&workspace.config().defaults);

        let rng = self
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        let mut generator = Generator::with_rng(rng)
            .repeated_placeholders(workspace.config().repeated_placeholders);

        let Generation { idea, fallback } = generator.generate(&options, &templates);

        if let Some(fallback) = &fallback {
            eprintln!(
                "{}",
                format!(
                    "No {} template for '{}'; used '{}' instead",
                    options.book_type, fallback.requested, fallback.used
                )
                .warning()
            );
        }

        match self.output {
            OutputFormat::Pretty => print_idea(&idea),
            OutputFormat::Json => print_json(&idea)?,
        }

        if self.save {
            let id = idea.id.clone();
            workspace.favorites().save(idea)?;
            eprintln!("{}", format!("Saved {id} to favourites").success());
        }

        Ok(())
    }

    /// Merges the explicit flags over the configured defaults.
    ///
    /// Choosing a book type without a genre uses that type's default genre,
    /// so `--type non-fiction` does not inherit a fiction genre.
    fn options(&self, defaults: &GeneratorOptions) -> GeneratorOptions {
        let book_type = self.book_type.unwrap_or(defaults.book_type);
        let genre = match (&self.genre, self.book_type) {
            (Some(genre), _) => genre.trim().to_lowercase(),
            (None, Some(book_type)) if book_type != defaults.book_type => {
                book_type.default_genre().to_string()
            }
            (None, _) => defaults.genre.clone(),
        };

        GeneratorOptions {
            book_type,
            genre,
            length: self.length.unwrap_or(defaults.length),
            target_age: self.target_age.unwrap_or(defaults.target_age),
            tone: self.tone.unwrap_or(defaults.tone),
        }
    }
}
