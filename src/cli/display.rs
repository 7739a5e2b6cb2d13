//! Shared rendering of ideas on the terminal.

use bookspark::BookIdea;
use serde::Serialize;

use super::terminal::{Colorize, is_narrow, wrap};

/// Output format of commands that print ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Output format of commands that print several ideas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_idea(idea: &BookIdea) {
    println!("{}", "Title Options".strong());
    for (i, title) in idea.title.iter().enumerate() {
        println!("  {}. {}", i + 1, title.info());
    }
    println!();

    println!("  {} {}", "Genre:".dim(), idea.genre);
    println!("  {} {}", "Audience:".dim(), idea.target_audience);
    println!();

    for (heading, body) in [
        ("Concept", idea.concept.as_str()),
        ("Main Character", idea.main_character.as_str()),
        ("Setting", idea.setting.as_str()),
        ("Central Conflict", idea.conflict.as_str()),
    ] {
        println!("{}", heading.strong());
        println!("{}", wrap(body, "  "));
        println!();
    }

    println!("{}", "Opening Line".strong());
    println!("{}", wrap(&format!("\"{}\"", idea.opening_line), "  "));
    println!();

    println!("{}", "Key Themes".strong());
    println!("  {}", idea.themes.join(", "));
    println!();

    println!(
        "{}",
        format!(
            "id {} · generated {}",
            idea.id,
            idea.generated_at.format("%Y-%m-%d %H:%M UTC")
        )
        .dim()
    );
}

/// Prints one row per idea: id, genre and first title.
///
/// The genre column is dropped on narrow terminals.
pub fn print_table(ideas: &[BookIdea]) {
    let narrow = is_narrow();
    let genre_width = ideas
        .iter()
        .map(|idea| idea.genre.len())
        .max()
        .unwrap_or(0)
        .max("GENRE".len());

    if narrow {
        println!("{}", format!("{:<36}  TITLE", "ID").dim());
    } else {
        println!(
            "{}",
            format!("{:<36}  {:<genre_width$}  TITLE", "ID", "GENRE").dim()
        );
    }

    for idea in ideas {
        let title = idea.title.first().map_or("", String::as_str);
        if narrow {
            println!("{:<36}  {title}", idea.id);
        } else {
            println!("{:<36}  {:<genre_width$}  {title}", idea.id, idea.genre);
        }
    }
}
