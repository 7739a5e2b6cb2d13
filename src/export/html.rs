use std::fmt::{self, Write};

use chrono::NaiveDate;

use super::DATE_FORMAT;
use crate::BookIdea;

const STYLE: &str = include_str!("../../data/print.css");

/// Renders ideas as a standalone, print-ready HTML document dated `today`.
///
/// All idea text is escaped, so imported payloads cannot inject markup.
///
/// # Panics
///
/// Never: writing into a `String` cannot fail.
#[must_use]
pub fn html(ideas: &[BookIdea], today: NaiveDate) -> String {
    let mut out = String::new();
    write_document(&mut out, ideas, today).expect("formatting into a String cannot fail");
    out
}

fn write_document(out: &mut String, ideas: &[BookIdea], today: NaiveDate) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>BookSpark - Favorite Book Ideas</title>")?;
    writeln!(out, "<style>\n{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "<div class=\"header\">")?;
    writeln!(out, "<h1>BookSpark - Favorite Book Ideas</h1>")?;
    writeln!(
        out,
        "<div class=\"subtitle\">Generated on {}</div>",
        today.format(DATE_FORMAT)
    )?;
    writeln!(out, "<div class=\"subtitle\">Total Ideas: {}</div>", ideas.len())?;
    writeln!(out, "</div>")?;

    for (index, idea) in ideas.iter().enumerate() {
        write_idea(out, index + 1, idea)?;
    }

    writeln!(out, "<div class=\"footer\">")?;
    writeln!(out, "<p>Created with <strong>BookSpark</strong>.</p>")?;
    writeln!(out, "<p>A book idea generator for writers and storytellers.</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_idea(out: &mut String, number: usize, idea: &BookIdea) -> fmt::Result {
    writeln!(out, "<div class=\"idea\">")?;
    writeln!(out, "<h2 class=\"idea-number\">Idea #{number}</h2>")?;

    writeln!(out, "<div class=\"section-title\">Title Options:</div>")?;
    for (i, title) in idea.title.iter().enumerate() {
        writeln!(
            out,
            "<div class=\"title-option\">{}. {}</div>",
            i + 1,
            Escaped(title)
        )?;
    }

    writeln!(out, "<div class=\"meta-info\">")?;
    writeln!(out, "<span><strong>Genre:</strong> {}</span>", Escaped(&idea.genre))?;
    writeln!(
        out,
        "<span><strong>Audience:</strong> {}</span>",
        Escaped(&idea.target_audience)
    )?;
    writeln!(
        out,
        "<span><strong>Generated:</strong> {}</span>",
        idea.generated_at.format(DATE_FORMAT)
    )?;
    writeln!(out, "</div>")?;

    for (heading, body) in [
        ("Concept", idea.concept.as_str()),
        ("Main Character", idea.main_character.as_str()),
        ("Setting", idea.setting.as_str()),
        ("Central Conflict", idea.conflict.as_str()),
    ] {
        writeln!(out, "<div class=\"section-title\">{heading}:</div>")?;
        writeln!(out, "<div class=\"section-content\">{}</div>", Escaped(body))?;
    }

    writeln!(out, "<div class=\"section-title\">Opening Line:</div>")?;
    writeln!(
        out,
        "<div class=\"opening-line\">&quot;{}&quot;</div>",
        Escaped(&idea.opening_line)
    )?;

    writeln!(out, "<div class=\"section-title\">Key Themes:</div>")?;
    write!(out, "<div class=\"themes\">")?;
    for theme in &idea.themes {
        write!(out, "<span class=\"theme-tag\">{}</span>", Escaped(theme))?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "</div>")
}

/// Displays a string with HTML special characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
