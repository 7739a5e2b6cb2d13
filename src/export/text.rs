use std::fmt::Write;

use chrono::NaiveDate;

use super::DATE_FORMAT;
use crate::BookIdea;

const WIDTH: usize = 80;

/// Renders ideas as a plain-text report dated `today`.
///
/// # Panics
///
/// Never: writing into a `String` cannot fail.
#[must_use]
pub fn text(ideas: &[BookIdea], today: NaiveDate) -> String {
    let mut out = String::new();
    write_report(&mut out, ideas, today).expect("formatting into a String cannot fail");
    out
}

fn write_report(out: &mut String, ideas: &[BookIdea], today: NaiveDate) -> std::fmt::Result {
    writeln!(out, "BOOKSPARK - FAVORITE BOOK IDEAS")?;
    writeln!(out, "Generated on: {}", today.format(DATE_FORMAT))?;
    writeln!(out, "Total Ideas: {}", ideas.len())?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out)?;

    for (index, idea) in ideas.iter().enumerate() {
        writeln!(out, "IDEA #{}", index + 1)?;
        writeln!(out)?;
        writeln!(out, "Title Options:")?;
        for (i, title) in idea.title.iter().enumerate() {
            writeln!(out, "  {}. {title}", i + 1)?;
        }
        writeln!(out)?;
        writeln!(out, "Genre: {}", idea.genre)?;
        writeln!(out, "Target Audience: {}", idea.target_audience)?;
        writeln!(out)?;

        for (heading, body) in [
            ("Concept", idea.concept.as_str()),
            ("Main Character", idea.main_character.as_str()),
            ("Setting", idea.setting.as_str()),
            ("Central Conflict", idea.conflict.as_str()),
        ] {
            writeln!(out, "{heading}:")?;
            writeln!(out, "{body}")?;
            writeln!(out)?;
        }

        writeln!(out, "Opening Line:")?;
        writeln!(out, "\"{}\"", idea.opening_line)?;
        writeln!(out)?;
        writeln!(out, "Key Themes:")?;
        writeln!(out, "{}", idea.themes.join(", "))?;
        writeln!(out)?;
        writeln!(out, "Generated: {}", idea.generated_at.format(DATE_FORMAT))?;
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(WIDTH))?;
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Created with BookSpark.")?;
    writeln!(out, "A book idea generator for writers and storytellers.")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn idea(id: &str, concept: &str) -> BookIdea {
        BookIdea {
            id: id.to_string(),
            title: vec!["First".to_string(), "Second".to_string(), "Third".to_string()],
            genre: "Mystery".to_string(),
            concept: concept.to_string(),
            main_character: "A retired detective".to_string(),
            setting: "A fog-bound harbour".to_string(),
            conflict: "A missing heir".to_string(),
            target_audience: "Adults (Ages 18+)".to_string(),
            opening_line: "The fog came in early.".to_string(),
            themes: vec!["Truth".to_string(), "Loyalty".to_string()],
            generated_at: Utc.with_ymd_and_hms(2025, 3, 9, 8, 0, 0).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn header_counts_ideas() {
        let report = text(&[idea("a", "One"), idea("b", "Two")], today());

        assert!(report.starts_with(
            "BOOKSPARK - FAVORITE BOOK IDEAS\nGenerated on: 2025-04-01\nTotal Ideas: 2\n"
        ));
        assert!(report.contains(&"=".repeat(80)));
    }

    #[test]
    fn each_idea_has_a_numbered_section() {
        let report = text(&[idea("a", "Concept one"), idea("b", "Concept two")], today());

        assert!(report.contains("IDEA #1\n"));
        assert!(report.contains("IDEA #2\n"));
        assert!(report.contains("Concept one"));
        assert!(report.contains("Concept two"));
        assert_eq!(report.matches(&"-".repeat(80)).count(), 2);
    }

    #[test]
    fn section_layout() {
        let report = text(&[idea("a", "A body washes ashore.")], today());

        assert!(report.contains("Title Options:\n  1. First\n  2. Second\n  3. Third\n"));
        assert!(report.contains("Concept:\nA body washes ashore.\n"));
        assert!(report.contains("Central Conflict:\nA missing heir\n"));
        assert!(report.contains("Opening Line:\n\"The fog came in early.\"\n"));
        assert!(report.contains("Key Themes:\nTruth, Loyalty\n"));
        assert!(report.contains("Generated: 2025-03-09\n"));
    }

    #[test]
    fn empty_report() {
        let report = text(&[], today());
        assert!(report.contains("Total Ideas: 0"));
        assert!(!report.contains("IDEA #"));
        assert!(report.ends_with("storytellers.\n"));
    }
}
