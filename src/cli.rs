use std::path::PathBuf;

mod display;
mod generate;
mod genres;
mod init;
mod list;
mod remove;
mod search;
mod show;
mod status;
mod terminal;
mod transfer;
mod workspace;

use clap::ArgAction;
use generate::Generate;
use genres::Genres;
use init::Init;
use list::List;
use remove::{Clear, Remove};
use search::Search;
use show::Show;
use status::Status;
use tracing::instrument;
use transfer::{Export, Import};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory holding the `.bookspark` state directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Show the number of saved favourites and where they are stored
    Status(Status),

    /// Create a `.bookspark` directory with a default configuration
    Init(Init),

    /// Generate a book idea
    Generate(Generate),

    /// List the genres that have templates
    Genres(Genres),

    /// List saved favourites
    List(List),

    /// Show a saved favourite
    Show(Show),

    /// Search saved favourites
    ///
    /// Matches titles, concept, genre, themes, main character and setting,
    /// ignoring case.
    Search(Search),

    /// Remove a saved favourite
    Remove(Remove),

    /// Remove every saved favourite
    Clear(Clear),

    /// Export saved favourites as JSON, plain text or printable HTML
    Export(Export),

    /// Import favourites from a JSON export
    ///
    /// Imported ideas replace saved ideas with the same id.
    Import(Import),
}

impl Command {
    #[instrument(level = "trace", skip(self))]
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Status(command) => command.run(root)?,
            Self::Init(command) => command.run(&root)?,
            Self::Generate(command) => command.run(root)?,
            Self::Genres(command) => command.run(root)?,
            Self::List(command) => command.run(root)?,
            Self::Show(command) => command.run(root)?,
            Self::Search(command) => command.run(root)?,
            Self::Remove(command) => command.run(root)?,
            Self::Clear(command) => command.run(root)?,
            Self::Export(command) => command.run(root)?,
            Self::Import(command) => command.run(root)?,
        }
        Ok(())
    }
}
